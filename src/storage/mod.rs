mod seen_file;

pub use seen_file::SeenStore;
