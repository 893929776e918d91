use self::Attribute::Scalar;

/// Describes one positional attribute of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    /// A single value token.
    Scalar(&'static str),
    /// A `{key value ...}` array read pairwise into `key`/`value` fields.
    Composite {
        name: &'static str,
        key: &'static str,
        value: &'static str,
        many: bool,
    },
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match *self {
            Attribute::Scalar(name) | Attribute::Composite { name, .. } => name,
        }
    }
}

const OBJEKT: Attribute = Attribute::Composite {
    name: "objekt",
    key: "dimensionsnr",
    value: "objektnr",
    many: false,
};

const OBJEKTLISTA: Attribute = Attribute::Composite {
    name: "objektlista",
    key: "dimensionsnr",
    value: "objektnr",
    many: true,
};

const BALANCE: &[Attribute] = &[
    Scalar("arsnr"),
    Scalar("konto"),
    Scalar("saldo"),
    Scalar("kvantitet"),
];

const OBJECT_BALANCE: &[Attribute] = &[
    Scalar("arsnr"),
    Scalar("konto"),
    OBJEKT,
    Scalar("saldo"),
    Scalar("kvantitet"),
];

const PERIOD_BALANCE: &[Attribute] = &[
    Scalar("arsnr"),
    Scalar("period"),
    Scalar("konto"),
    OBJEKT,
    Scalar("saldo"),
    Scalar("kvantitet"),
];

const TRANSACTION: &[Attribute] = &[
    Scalar("kontonr"),
    OBJEKTLISTA,
    Scalar("belopp"),
    Scalar("transdat"),
    Scalar("transtext"),
    Scalar("kvantitet"),
    Scalar("sign"),
];

macro_rules! entry_types {
    ($($variant:ident => $label:literal: $attributes:expr,)*) => {
        /// Every entry label known to the SIE 4 format.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum EntryType {
            $($variant,)*
        }

        impl EntryType {
            pub const ALL: &'static [EntryType] = &[$(EntryType::$variant,)*];

            /// Looks up a label, ignoring ASCII case and an optional leading `#`.
            pub fn from_label(label: &str) -> Option<EntryType> {
                let label = label.strip_prefix('#').unwrap_or(label);
                $(
                    if label.eq_ignore_ascii_case($label) {
                        return Some(EntryType::$variant);
                    }
                )*
                None
            }

            /// Lowercase label, without `#`.
            pub fn label(&self) -> &'static str {
                match self {
                    $(EntryType::$variant => $label,)*
                }
            }

            /// Attribute descriptors in positional order.
            pub fn attributes(&self) -> &'static [Attribute] {
                match self {
                    $(EntryType::$variant => $attributes,)*
                }
            }
        }
    };
}

entry_types! {
    Adress => "adress": &[Scalar("kontakt"), Scalar("utdelningsadr"), Scalar("postadr"), Scalar("tel")],
    Bkod => "bkod": &[Scalar("SNI-kod")],
    Dim => "dim": &[Scalar("dimensionsnr"), Scalar("namn")],
    Enhet => "enhet": &[Scalar("kontonr"), Scalar("enhet")],
    Flagga => "flagga": &[Scalar("x")],
    Fnamn => "fnamn": &[Scalar("foretagsnamn")],
    Fnr => "fnr": &[Scalar("foretagsid")],
    Format => "format": &[Scalar("PC8")],
    Ftyp => "ftyp": &[Scalar("foretagstyp")],
    Gen => "gen": &[Scalar("datum"), Scalar("sign")],
    Ib => "ib": BALANCE,
    Konto => "konto": &[Scalar("kontonr"), Scalar("kontonamn")],
    Kptyp => "kptyp": &[Scalar("typ")],
    Ktyp => "ktyp": &[Scalar("kontonr"), Scalar("kontotyp")],
    Objekt => "objekt": &[Scalar("dimensionsnr"), Scalar("objektnr"), Scalar("objektnamn")],
    Oib => "oib": OBJECT_BALANCE,
    Omfattn => "omfattn": &[Scalar("datum")],
    Orgnr => "orgnr": &[Scalar("orgnr"), Scalar("forvnr"), Scalar("verknr")],
    Oub => "oub": OBJECT_BALANCE,
    Pbudget => "pbudget": PERIOD_BALANCE,
    Program => "program": &[Scalar("programnamn"), Scalar("version")],
    Prosa => "prosa": &[Scalar("text")],
    Psaldo => "psaldo": PERIOD_BALANCE,
    Rar => "rar": &[Scalar("arsnr"), Scalar("start"), Scalar("slut")],
    Res => "res": &[Scalar("ars"), Scalar("konto"), Scalar("saldo"), Scalar("kvantitet")],
    Sietyp => "sietyp": &[Scalar("typnr")],
    Sru => "sru": &[Scalar("konto"), Scalar("SRU-kod")],
    Taxar => "taxar": &[Scalar("ar")],
    Trans => "trans": TRANSACTION,
    Rtrans => "rtrans": TRANSACTION,
    Btrans => "btrans": TRANSACTION,
    Ub => "ub": BALANCE,
    Underdim => "underdim": &[Scalar("dimensionsnr"), Scalar("namn"), Scalar("superdimension")],
    Valuta => "valuta": &[Scalar("valutakod")],
    Ver => "ver": &[Scalar("serie"), Scalar("vernr"), Scalar("verdatum"), Scalar("vertext"), Scalar("regdatum"), Scalar("sign")],
}

/// Maps entry labels to their attribute descriptors.
pub trait SchemaRegistry {
    fn lookup(&self, label: &str) -> Option<&[Attribute]>;

    fn is_known(&self, label: &str) -> bool {
        self.lookup(label).is_some()
    }
}

/// The built-in SIE 4 entry table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sie4;

impl SchemaRegistry for Sie4 {
    fn lookup(&self, label: &str) -> Option<&[Attribute]> {
        EntryType::from_label(label).map(|entry_type| entry_type.attributes())
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::{Attribute, EntryType, SchemaRegistry, Sie4};

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(EntryType::from_label("VER"), Some(EntryType::Ver));
        assert_eq!(EntryType::from_label("ver"), Some(EntryType::Ver));
        assert_eq!(EntryType::from_label("#Trans"), Some(EntryType::Trans));
        assert_eq!(EntryType::from_label("FOO"), None);
        assert_eq!(EntryType::from_label(""), None);
    }

    #[test]
    fn every_label_round_trips() {
        for entry_type in EntryType::ALL {
            assert_eq!(EntryType::from_label(entry_type.label()), Some(*entry_type));
            assert!(!entry_type.attributes().is_empty());
        }
    }

    #[test]
    fn transaction_object_list_is_repeatable() {
        let objektlista = EntryType::Trans.attributes()[1];
        assert_eq!(
            objektlista,
            Attribute::Composite {
                name: "objektlista",
                key: "dimensionsnr",
                value: "objektnr",
                many: true,
            }
        );
        assert_eq!(objektlista.name(), "objektlista");
    }

    #[test]
    fn object_balance_holds_a_single_object() {
        let names: Vec<_> = EntryType::Oib.attributes().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["arsnr", "konto", "objekt", "saldo", "kvantitet"]);
        assert!(matches!(
            EntryType::Oib.attributes()[2],
            Attribute::Composite { many: false, .. }
        ));
    }

    #[test]
    fn registry_lookup() {
        assert!(Sie4.is_known("KONTO"));
        assert!(!Sie4.is_known("KONTOX"));
        assert_eq!(Sie4.lookup("sietyp").map(|attrs| attrs.len()), Some(1));
    }
}
