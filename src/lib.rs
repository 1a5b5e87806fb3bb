pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod report;
pub mod scoring;
pub mod topology;
pub mod web;

pub use board::{Holdings, Resource, Tile, TileGrid, TileSpec};
pub use error::BoardError;
pub use scoring::{BoardScores, NodeScore, NodeScorer};
pub use topology::{NodeId, Port, Topology};
