pub mod colleges;
