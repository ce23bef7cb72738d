pub mod common;

pub mod a001_project;
pub mod a002_service;
pub mod a003_branch;
