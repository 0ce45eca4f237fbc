//! # IronCBI Records
//!
//! The CBI credit-transfer ("bonifici") record catalog: the fixed-width
//! record types of the Italian interbank payment-order flow, declared with
//! [`ironcbi_schema::SchemaBuilder`].
//!
//! Every record in the flow is exactly [`RECORD_WIDTH`] characters. Field
//! positions are the 1-based positions printed in the CBI documentation; the
//! builder verifies each one against the running width cursor, so the whole
//! catalog is revalidated every time it is built.

pub mod credit_transfer;

pub use credit_transfer::{
    RECORD_WIDTH, ef_record, payee_address, payee_iban, payee_info, payer_iban, payer_info,
    pc_record, purpose_info, registry, status_request, transfer_info,
};
