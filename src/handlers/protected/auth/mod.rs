pub mod profile;

pub use profile::profile;
