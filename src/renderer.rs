use crate::parser::{BEGINNING_OF_ARRAY, END_OF_ARRAY};
use chrono::NaiveDate;

/// A value to be written on a SIE line.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Text(String),
    Integer(i64),
    Amount(f64),
    Date(NaiveDate),
    Array(Vec<Field>),
    Empty,
}

impl Field {
    fn render(&self) -> String {
        match self {
            Field::Text(text) => quote(text),
            Field::Integer(_) | Field::Amount(_) | Field::Date(_) => self.raw(),
            Field::Array(items) => {
                let mut leaves = Vec::new();
                flatten(items, &mut leaves);
                let items: Vec<_> = leaves.iter().map(|item| quote(&item.raw())).collect();
                format!("{}{}{}", BEGINNING_OF_ARRAY, items.join(" "), END_OF_ARRAY)
            }
            Field::Empty => quote(""),
        }
    }

    /// Unquoted textual form.
    fn raw(&self) -> String {
        match self {
            Field::Text(text) => text.clone(),
            Field::Integer(number) => number.to_string(),
            Field::Amount(amount) => format_amount(*amount),
            Field::Date(date) => date.format("%Y%m%d").to_string(),
            Field::Array(items) => items
                .iter()
                .map(Field::raw)
                .collect::<Vec<_>>()
                .join(" "),
            Field::Empty => String::new(),
        }
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Field::Text(text.to_string())
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Field::Text(text)
    }
}

impl From<i64> for Field {
    fn from(number: i64) -> Self {
        Field::Integer(number)
    }
}

impl From<u32> for Field {
    fn from(number: u32) -> Self {
        Field::Integer(number.into())
    }
}

impl From<f64> for Field {
    fn from(amount: f64) -> Self {
        Field::Amount(amount)
    }
}

impl From<NaiveDate> for Field {
    fn from(date: NaiveDate) -> Self {
        Field::Date(date)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Empty, Into::into)
    }
}

/// Nested arrays are written inline: `[6, [1, 2]]` renders as `{"6" "1" "2"}`.
fn flatten<'f>(items: &'f [Field], leaves: &mut Vec<&'f Field>) {
    for item in items {
        match item {
            Field::Array(nested) => flatten(nested, leaves),
            leaf => leaves.push(leaf),
        }
    }
}

/// Amounts keep two decimals at most and always show one.
fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Collects SIE lines in order.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    lines: Vec<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends `#LABEL field field ...`.
    pub fn add_line(&mut self, label: &str, fields: &[Field]) {
        let mut line = format!("#{}", label.to_uppercase());
        for field in fields {
            line.push(' ');
            line.push_str(&field.render());
        }
        self.lines.push(line);
    }

    pub fn add_beginning_of_array(&mut self) {
        self.lines.push(BEGINNING_OF_ARRAY.to_string());
    }

    pub fn add_end_of_array(&mut self) {
        self.lines.push(END_OF_ARRAY.to_string());
    }

    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_line;
    use crate::renderer::{format_amount, Field, Renderer};
    use chrono::NaiveDate;

    use anyhow::{anyhow, Result};

    #[test]
    fn render_fields() -> Result<()> {
        let date = NaiveDate::from_ymd_opt(2011, 9, 3).ok_or(anyhow!("invalid date"))?;
        let mut renderer = Renderer::new();
        renderer.add_line(
            "trans",
            &[
                1500u32.into(),
                Field::Array(vec![6u32.into(), 1u32.into()]),
                512f64.into(),
                date.into(),
                "Item 1".into(),
            ],
        );
        renderer.add_line("ver", &[None::<&str>.into(), Some(2u32).into()]);
        assert_eq!(
            renderer.render(),
            "#TRANS 1500 {\"6\" \"1\"} 512.0 20110903 \"Item 1\"\n#VER \"\" 2\n"
        );
        Ok(())
    }

    #[test]
    fn arrays_and_blocks() {
        let mut renderer = Renderer::new();
        renderer.add_line("trans", &[Field::Array(vec![])]);
        renderer.add_beginning_of_array();
        renderer.add_end_of_array();
        assert_eq!(renderer.render(), "#TRANS {}\n{\n}\n");
        assert_eq!(Renderer::new().render(), "");
    }

    #[test]
    fn nested_arrays_are_flattened() -> Result<()> {
        let mut renderer = Renderer::new();
        renderer.add_line(
            "trans",
            &[
                1500u32.into(),
                Field::Array(vec![
                    6u32.into(),
                    Field::Array(vec![1u32.into(), Field::Array(vec![])]),
                ]),
                5f64.into(),
            ],
        );
        let rendered = renderer.render();
        assert_eq!(rendered, "#TRANS 1500 {\"6\" \"1\"} 5.0\n");

        let entry = parse_line(rendered.trim_end(), false)?;
        assert_eq!(entry.scalar("belopp"), Some("5.0"));
        Ok(())
    }

    #[test]
    fn text_is_escaped() -> Result<()> {
        let mut renderer = Renderer::new();
        renderer.add_line("fnamn", &[r#"Foo "Bar" \ Baz"#.into()]);
        let rendered = renderer.render();
        assert_eq!(rendered, "#FNAMN \"Foo \\\"Bar\\\" \\\\ Baz\"\n");

        let entry = parse_line(rendered.trim_end(), false)?;
        assert_eq!(entry.scalar("foretagsnamn"), Some(r#"Foo "Bar" \ Baz"#));
        Ok(())
    }

    #[test]
    fn amounts() {
        assert_eq!(format_amount(1600.0), "1600.0");
        assert_eq!(format_amount(4603.64), "4603.64");
        assert_eq!(format_amount(-256.5), "-256.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(-0.001), "0.0");
        assert_eq!(format_amount(12.345678), "12.35");
    }

    #[test]
    fn scalar_round_trip() -> Result<()> {
        let mut renderer = Renderer::new();
        renderer.add_line("konto", &[3100u32.into(), "Sales".into()]);
        let entry = parse_line(renderer.render().trim_end(), false)?;
        assert_eq!(entry.scalar("kontonr"), Some("3100"));
        assert_eq!(entry.scalar("kontonamn"), Some("Sales"));
        Ok(())
    }
}
