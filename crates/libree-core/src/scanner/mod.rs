mod walk;

pub use walk::files;
