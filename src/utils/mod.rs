pub mod endian;
