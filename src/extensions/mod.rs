pub mod compass_ext;
pub mod option_ext;
