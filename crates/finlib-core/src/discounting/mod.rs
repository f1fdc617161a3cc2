pub mod npv;
