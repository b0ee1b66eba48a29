/// Analysis modules — result selection shared by all walker tasks.
pub mod top_files;

pub use top_files::TopFiles;
