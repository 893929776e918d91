use chrono::NaiveDate;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub number: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DimensionObject {
    pub number: u32,
    pub description: String,
}

/// A dimension (e.g. cost center, project) and its objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    pub number: u32,
    pub description: String,
    pub objects: Vec<DimensionObject>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinancialYear {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoucherKind {
    Invoice,
    Payment,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VoucherLine {
    pub account_number: u32,
    pub amount: f64,
    pub booked_on: Option<NaiveDate>,
    pub description: Option<String>,
    /// Dimension number to object number.
    pub dimensions: IndexMap<u32, u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Voucher {
    /// Explicit series; derived from `creditor` and `kind` when absent.
    pub series: Option<String>,
    pub creditor: bool,
    pub kind: VoucherKind,
    pub number: u32,
    pub booked_on: NaiveDate,
    pub description: String,
    pub lines: Vec<VoucherLine>,
}

impl Voucher {
    pub fn series(&self) -> &str {
        self.series
            .as_deref()
            .unwrap_or_else(|| VoucherSeries::select(self.creditor, self.kind).code())
    }
}

/// Standard voucher series codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoucherSeries {
    /// Customer invoice, `KF`.
    DebtorInvoice,
    /// Customer payment, `KI`.
    DebtorPayment,
    /// Supplier invoice, `LF`.
    SupplierInvoice,
    /// Supplier payment, `KB`.
    SupplierPayment,
    /// Anything else, `LV`.
    Other,
}

impl VoucherSeries {
    pub fn select(creditor: bool, kind: VoucherKind) -> Self {
        match (kind, creditor) {
            (VoucherKind::Invoice, true) => VoucherSeries::SupplierInvoice,
            (VoucherKind::Invoice, false) => VoucherSeries::DebtorInvoice,
            (VoucherKind::Payment, true) => VoucherSeries::SupplierPayment,
            (VoucherKind::Payment, false) => VoucherSeries::DebtorPayment,
            (VoucherKind::Other, _) => VoucherSeries::Other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            VoucherSeries::DebtorInvoice => "KF",
            VoucherSeries::DebtorPayment => "KI",
            VoucherSeries::SupplierInvoice => "LF",
            VoucherSeries::SupplierPayment => "KB",
            VoucherSeries::Other => "LV",
        }
    }
}

/// Supplies the bookkeeping data a [`Document`][crate::document::Document]
/// renders.
pub trait DataSource {
    fn program(&self) -> &str;
    fn program_version(&self) -> &str;
    fn generated_on(&self) -> NaiveDate;
    fn company_name(&self) -> &str;
    fn accounts(&self) -> &[Account];
    fn balance_account_numbers(&self) -> &[u32];
    fn closing_account_numbers(&self) -> &[u32];
    /// Balance of an account before `date`, `None` when it has none.
    fn balance_before(&self, account_number: u32, date: NaiveDate) -> Option<f64>;
    fn financial_years(&self) -> &[FinancialYear];
    fn dimensions(&self) -> &[Dimension];
    fn vouchers(&self) -> &[Voucher];
}

#[cfg(test)]
mod tests {
    use crate::data_source::{Voucher, VoucherKind, VoucherSeries};
    use chrono::NaiveDate;

    use anyhow::{anyhow, Result};

    #[test]
    fn series_from_kind() {
        assert_eq!(VoucherSeries::select(false, VoucherKind::Invoice).code(), "KF");
        assert_eq!(VoucherSeries::select(true, VoucherKind::Invoice).code(), "LF");
        assert_eq!(VoucherSeries::select(false, VoucherKind::Payment).code(), "KI");
        assert_eq!(VoucherSeries::select(true, VoucherKind::Payment).code(), "KB");
        assert_eq!(VoucherSeries::select(true, VoucherKind::Other).code(), "LV");
    }

    #[test]
    fn explicit_series_wins() -> Result<()> {
        let mut voucher = Voucher {
            series: None,
            creditor: true,
            kind: VoucherKind::Payment,
            number: 1,
            booked_on: NaiveDate::from_ymd_opt(2012, 8, 31).ok_or(anyhow!("invalid date"))?,
            description: "Payout 1".to_string(),
            lines: vec![],
        };
        assert_eq!(voucher.series(), "KB");

        voucher.series = Some("X".to_string());
        assert_eq!(voucher.series(), "X");
        Ok(())
    }
}
