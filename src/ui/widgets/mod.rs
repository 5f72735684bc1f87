pub mod solid;
