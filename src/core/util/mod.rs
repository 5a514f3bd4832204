pub mod linear_map;
