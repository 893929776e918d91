use crate::data_source::{DataSource, FinancialYear, Voucher};
use crate::renderer::{Field, Renderer};

use chrono::NaiveDate;

/// Some importers cut descriptions short (Visma at 100, Fortnox at 200).
pub const DESCRIPTION_LENGTH_MAX: usize = 100;

/// Renders a [`DataSource`] as a SIE 4 document.
pub struct Document<'d, D: DataSource + ?Sized> {
    data_source: &'d D,
}

impl<'d, D: DataSource + ?Sized> Document<'d, D> {
    pub fn new(data_source: &'d D) -> Self {
        Self { data_source }
    }

    pub fn render(&self) -> String {
        let mut renderer = Renderer::new();
        let financial_years = self.financial_years();

        self.add_header(&mut renderer);
        self.add_financial_years(&mut renderer, &financial_years);
        self.add_accounts(&mut renderer);
        self.add_dimensions(&mut renderer);
        self.add_balances(&mut renderer, &financial_years);
        self.add_vouchers(&mut renderer);

        renderer.render()
    }

    fn add_header(&self, renderer: &mut Renderer) {
        let source = self.data_source;
        renderer.add_line("FLAGGA", &[Field::Integer(0)]);
        renderer.add_line(
            "PROGRAM",
            &[source.program().into(), source.program_version().into()],
        );
        renderer.add_line("FORMAT", &["PC8".into()]);
        renderer.add_line("GEN", &[source.generated_on().into()]);
        renderer.add_line("SIETYP", &[Field::Integer(4)]);
        renderer.add_line("FNAMN", &[source.company_name().into()]);
    }

    fn add_financial_years(&self, renderer: &mut Renderer, years: &[FinancialYear]) {
        for (index, year) in years.iter().enumerate() {
            renderer.add_line(
                "RAR",
                &[year_index(index), year.start.into(), year.end.into()],
            );
        }
    }

    fn add_accounts(&self, renderer: &mut Renderer) {
        for account in self.data_source.accounts() {
            renderer.add_line(
                "KONTO",
                &[
                    account.number.into(),
                    truncate(&account.description).into(),
                ],
            );
        }
    }

    fn add_dimensions(&self, renderer: &mut Renderer) {
        for dimension in self.data_source.dimensions() {
            renderer.add_line(
                "DIM",
                &[dimension.number.into(), dimension.description.as_str().into()],
            );

            for object in &dimension.objects {
                renderer.add_line(
                    "OBJEKT",
                    &[
                        dimension.number.into(),
                        object.number.into(),
                        object.description.as_str().into(),
                    ],
                );
            }
        }
    }

    fn add_balances(&self, renderer: &mut Renderer, years: &[FinancialYear]) {
        let source = self.data_source;
        for (index, year) in years.iter().enumerate() {
            let balance_accounts = source.balance_account_numbers();
            self.add_balance_rows(renderer, "IB", index, balance_accounts, year.start);
            self.add_balance_rows(renderer, "UB", index, balance_accounts, year.end);
            self.add_balance_rows(
                renderer,
                "RES",
                index,
                source.closing_account_numbers(),
                year.end,
            );
        }
    }

    fn add_balance_rows(
        &self,
        renderer: &mut Renderer,
        label: &str,
        year: usize,
        account_numbers: &[u32],
        date: NaiveDate,
    ) {
        for &account_number in account_numbers {
            // Accounts without a balance are left out (SIE 4B, 5.17).
            let balance = match self.data_source.balance_before(account_number, date) {
                Some(balance) if balance != 0.0 => balance,
                _ => continue,
            };

            renderer.add_line(
                label,
                &[year_index(year), account_number.into(), balance.into()],
            );
        }
    }

    fn add_vouchers(&self, renderer: &mut Renderer) {
        for voucher in self.data_source.vouchers() {
            add_voucher(renderer, voucher);
        }
    }

    /// Newest year first.
    fn financial_years(&self) -> Vec<FinancialYear> {
        let mut years = self.data_source.financial_years().to_vec();
        years.sort_by_key(|year| year.start);
        years.reverse();
        years
    }
}

fn add_voucher(renderer: &mut Renderer, voucher: &Voucher) {
    renderer.add_line(
        "VER",
        &[
            voucher.series().into(),
            voucher.number.into(),
            voucher.booked_on.into(),
            truncate(&voucher.description).into(),
        ],
    );

    renderer.add_beginning_of_array();

    for line in &voucher.lines {
        let dimensions: Vec<Field> = line
            .dimensions
            .iter()
            .flat_map(|(&dimension, &object)| [Field::from(dimension), Field::from(object)])
            .collect();
        let fields = [
            line.account_number.into(),
            Field::Array(dimensions),
            line.amount.into(),
            line.booked_on.into(),
            line.description.as_deref().map(truncate).into(),
        ];

        renderer.add_line("TRANS", &fields);

        // Some importers (Fortnox) reject a voucher with a single line, so a
        // zeroed single line is written twice.
        if voucher.lines.len() < 2 && line.amount == 0.0 {
            renderer.add_line("TRANS", &fields);
        }
    }

    renderer.add_end_of_array();
}

fn year_index(index: usize) -> Field {
    Field::Integer(-(index as i64))
}

fn truncate(description: &str) -> String {
    description.chars().take(DESCRIPTION_LENGTH_MAX).collect()
}

#[cfg(test)]
mod tests {
    use crate::document::{truncate, year_index, DESCRIPTION_LENGTH_MAX};
    use crate::renderer::Field;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short"), "short");
        assert_eq!(truncate(&"å".repeat(101)).chars().count(), DESCRIPTION_LENGTH_MAX);
        assert_eq!(truncate(&"k".repeat(100)), "k".repeat(100));
    }

    #[test]
    fn year_indexes_count_backwards() {
        assert_eq!(year_index(0), Field::Integer(0));
        assert_eq!(year_index(2), Field::Integer(-2));
    }
}
