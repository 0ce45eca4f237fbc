//! Record schemas for the CBI credit-transfer flow.
//!
//! A flow is one `PC` header record, a sequence of per-order detail records
//! (`10` transfer data, `16`/`17` payer and payee IBANs, `20`/`30` payer and
//! payee identities, `40` payee address, `50` purpose text, `70` status
//! request), and one `EF` footer record. The assembling layer owns record
//! ordering and progressive numbering; this module only declares the layouts.

use ironcbi_schema::{RecordSchema, SchemaBuilder, SchemaError, SchemaRegistry};

/// Width of every record in the credit-transfer flow, in characters.
pub const RECORD_WIDTH: usize = 120;

/// `PC` flow header record.
///
/// # Errors
/// Never fails against the shipped definition; the error type is part of the
/// builder contract.
pub fn pc_record() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("PC")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "PC")
        .text(4, "sender", 5)
        .numeric(9, "recipient", 5)
        .date_short(14, "creation", 6)
        .text(20, "name", 20)
        .text(40, "available", 6)
        .text(46, "filler2", 59)
        .text(105, "flow_qualifier", 7)
        .text(112, "filler3", 1)
        .text(113, "prio", 1)
        .text_default(114, "currency_code", 1, "E")
        .text(115, "filler4", 1)
        .text(116, "not_available", 5)
        .build()
}

/// `EF` flow footer record with order and amount totals.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn ef_record() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("EF")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "EF")
        .text(4, "sender", 5)
        .numeric(9, "recipient", 5)
        .date_short(14, "creation", 6)
        .text(20, "name", 20)
        .text(40, "available", 6)
        .numeric(46, "orders", 7)
        .amount(53, "negative_amounts", 15)
        .amount(68, "positive_amounts", 15)
        .numeric(83, "records", 7)
        .text(90, "filler2", 23)
        .text(113, "prio", 1)
        .text_default(114, "currency_code", 1, "E")
        .text(115, "not_available", 6)
        .build()
}

/// Record `10`: transfer dates, amount, and ordering/receiving bank codes.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn transfer_info() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("10")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "10")
        .numeric(4, "prog_number", 7)
        .text(11, "filler2", 6)
        .date_short(17, "execution_date", 6)
        .date_short(23, "payee_date", 6)
        .text(29, "purpose", 5)
        .amount(34, "amount", 13)
        .text_default(47, "sign", 1, "+")
        .numeric(48, "ord_abi", 5)
        .numeric(53, "ord_cab", 5)
        .text(58, "ord_account", 12)
        .numeric(70, "rec_abi", 5)
        .numeric(75, "rec_cab", 5)
        .numeric(80, "rec_account", 12)
        .text(92, "filler3", 22)
        .numeric_default(114, "payment_method", 1, 1_i64)
        .text(115, "filler4", 4)
        .text(119, "prio", 1)
        .text_default(120, "currency_code", 1, "E")
        .build()
}

/// Record `16`: the payer's IBAN.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn payer_iban() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("16")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "16")
        .numeric(4, "prog_number", 7)
        .text(11, "iban", 27)
        .text(38, "filler2", 83)
        .build()
}

/// Record `17`: the payee's IBAN.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn payee_iban() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("17")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "17")
        .numeric(4, "prog_number", 7)
        .text(11, "iban", 27)
        .text(38, "filler2", 83)
        .build()
}

/// Record `20`: payer name, address, and tax code.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn payer_info() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("20")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "20")
        .numeric(4, "prog_number", 7)
        .text(11, "name", 30)
        .text(41, "address", 30)
        .text(71, "city", 30)
        .text(101, "tax_code", 16)
        .text(117, "filler2", 4)
        .build()
}

/// Record `30`: payee name and tax code.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn payee_info() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("30")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "30")
        .numeric(4, "prog_number", 7)
        .text(11, "name", 90)
        .text(101, "tax_code", 16)
        .text(117, "filler2", 4)
        .build()
}

/// Record `40`: payee address and destination bank description.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn payee_address() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("40")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "40")
        .numeric(4, "prog_number", 7)
        .text(11, "address", 30)
        .text(41, "postal_code", 5)
        .text(46, "town", 25)
        .text(71, "bank", 50)
        .build()
}

/// Record `50`: free-text payment purpose.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn purpose_info() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("50")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "50")
        .numeric(4, "prog_number", 7)
        .text(11, "desc", 90)
        .text(101, "filler2", 20)
        .build()
}

/// Record `70`: status request and flow qualification keys.
///
/// # Errors
/// Never fails against the shipped definition.
pub fn status_request() -> Result<RecordSchema, SchemaError> {
    SchemaBuilder::new("70")
        .text(1, "filler", 1)
        .text_default(2, "record_type", 2, "70")
        .numeric(4, "prog_number", 7)
        .text(11, "filler2", 5)
        .text(16, "not_available", 15)
        .text(31, "flow_qualifier", 7)
        .text(38, "mp_code", 5)
        .text(43, "filler3", 27)
        .text(70, "status_request_flag", 1)
        .text(71, "unique_code", 30)
        .text(101, "filler4", 10)
        .text(111, "payee_cin", 1)
        .text(112, "filler5", 1)
        .text(113, "check_keys", 8)
        .build()
}

/// Builds a registry holding every record schema of the credit-transfer flow.
///
/// # Errors
/// Never fails against the shipped definitions.
pub fn registry() -> Result<SchemaRegistry, SchemaError> {
    let mut registry = SchemaRegistry::new();
    registry.register(pc_record()?)?;
    registry.register(ef_record()?)?;
    registry.register(transfer_info()?)?;
    registry.register(payer_iban()?)?;
    registry.register(payee_iban()?)?;
    registry.register(payer_info()?)?;
    registry.register(payee_info()?)?;
    registry.register(payee_address()?)?;
    registry.register(purpose_info()?)?;
    registry.register(status_request()?)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ironcbi_schema::RecordInstance;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[test]
    fn test_every_record_is_120_characters() {
        let schemas = [
            pc_record(),
            ef_record(),
            transfer_info(),
            payer_iban(),
            payee_iban(),
            payer_info(),
            payee_info(),
            payee_address(),
            purpose_info(),
            status_request(),
        ];
        for schema in schemas {
            let schema = schema.unwrap();
            assert_eq!(
                schema.total_width(),
                RECORD_WIDTH,
                "record {} is not {RECORD_WIDTH} wide",
                schema.name()
            );
        }
    }

    #[test]
    fn test_registry_holds_the_whole_flow() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 10);
        for kind in ["PC", "EF", "10", "16", "17", "20", "30", "40", "50", "70"] {
            assert!(registry.get(kind).is_some(), "missing record kind {kind}");
        }
    }

    #[test]
    fn test_default_lines_carry_record_type() {
        let registry = registry().unwrap();
        for kind in ["PC", "EF", "10", "16", "17", "20", "30", "40", "50", "70"] {
            let line = registry.instantiate(kind).unwrap().format();
            assert_eq!(line.len(), RECORD_WIDTH);
            assert_eq!(&line[1..3], kind);
        }
    }

    #[test]
    fn test_transfer_record_layout() {
        let schema = Arc::new(transfer_info().unwrap());
        let mut record = RecordInstance::new(schema);
        record.set("prog_number", 1_i64).unwrap();
        record
            .set(
                "execution_date",
                NaiveDate::from_ymd_opt(2014, 5, 15).unwrap(),
            )
            .unwrap();
        record.set("amount", dec!(198.25)).unwrap();
        record.set("ord_abi", 7601_i64).unwrap();
        record.set("ord_cab", 11500_i64).unwrap();

        let line = record.format();
        assert_eq!(line.len(), RECORD_WIDTH);
        // 1-based documentation positions, checked as 0-based slices.
        assert_eq!(&line[1..3], "10");
        assert_eq!(&line[3..10], "      1");
        assert_eq!(&line[16..22], "150514");
        assert_eq!(&line[33..46], "        19825");
        assert_eq!(&line[46..47], "+");
        assert_eq!(&line[47..52], " 7601");
        assert_eq!(&line[52..57], "11500");
        assert_eq!(&line[113..114], "1");
        assert_eq!(&line[119..120], "E");
    }

    #[test]
    fn test_iban_record_carries_iban_text() {
        let registry = registry().unwrap();
        let mut record = registry.instantiate("16").unwrap();
        record.set("prog_number", 1_i64).unwrap();
        record.set("iban", "IT86U0760111500000010117463").unwrap();

        let line = record.format();
        assert_eq!(&line[10..37], "IT86U0760111500000010117463");
        assert_eq!(line.len(), RECORD_WIDTH);
    }

    #[test]
    fn test_footer_totals() {
        let registry = registry().unwrap();
        let mut record = registry.instantiate("EF").unwrap();
        record.set("orders", 3_i64).unwrap();
        record.set("positive_amounts", dec!(10081.01)).unwrap();
        record.set("records", 12_i64).unwrap();

        let line = record.format();
        assert_eq!(&line[45..52], "      3");
        // Negative totals default to zero.
        assert_eq!(&line[52..67], "              0");
        assert_eq!(&line[67..82], "        1008101");
        assert_eq!(&line[82..89], "     12");
    }
}
