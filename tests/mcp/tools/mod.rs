mod catalog;
mod config;
mod extract;
