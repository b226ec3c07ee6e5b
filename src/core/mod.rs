//! Core functionality: prompt templating, dispatch, and collaborators.

pub mod data;
pub mod dispatcher;
pub mod generate;
pub mod templates;
