pub mod commit_file;
pub mod git;
