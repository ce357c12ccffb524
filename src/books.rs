pub mod builder;
pub mod domain;
pub mod dto;
