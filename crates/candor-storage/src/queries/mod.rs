pub mod record_ops;
