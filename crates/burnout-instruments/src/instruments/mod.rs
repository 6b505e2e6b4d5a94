pub mod cbi19;
