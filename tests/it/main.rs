mod common;

mod ecr_repository;
mod load_balancing;
mod manifest;
mod template;
