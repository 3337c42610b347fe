//! Fantasy Grounds character sheet exporter.
//!
//! Renders a fixed `<root version="4.7">` template. List entries are keyed
//! `id-00001`, `id-00002`, ... in order within each list.

use std::fmt::Write as _;

use cosmere_domain::game_systems::talents;
use cosmere_domain::{CharacterRecord, DerivedSheet, Stat};

const ROOT_VERSION: &str = "4.7";

/// Convert `NdM` dice notation to the `dM` form Fantasy Grounds expects.
///
/// Anything that is not `NdM` passes through unchanged.
pub fn fg_die(notation: &str) -> String {
    match notation.split_once('d') {
        Some((count, sides))
            if !count.is_empty()
                && count.chars().all(|c| c.is_ascii_digit())
                && sides.chars().all(|c| c.is_ascii_digit()) =>
        {
            format!("d{}", sides)
        }
        _ => notation.to_string(),
    }
}

/// Escape text for element content.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Key for the `index`th (zero-based) entry of a list.
pub fn list_id(index: usize) -> String {
    format!("id-{:05}", index + 1)
}

/// Indented element writer.
struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            out: String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"),
            depth: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push('\t');
        }
    }

    fn open(&mut self, tag: &str) {
        self.indent();
        let _ = writeln!(self.out, "<{}>", tag);
        self.depth += 1;
    }

    fn open_with(&mut self, tag: &str, attributes: &str) {
        self.indent();
        let _ = writeln!(self.out, "<{} {}>", tag, attributes);
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        let _ = writeln!(self.out, "</{}>", tag);
    }

    fn field(&mut self, tag: &str, kind: &str, value: impl ToString) {
        self.indent();
        let _ = writeln!(
            self.out,
            "<{tag} type=\"{kind}\">{}</{tag}>",
            escape_xml(&value.to_string())
        );
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders a record as a Fantasy Grounds character file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FantasyGroundsExporter;

impl FantasyGroundsExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, record: &CharacterRecord) -> String {
        let derived = DerivedSheet::from_record(record);
        let mut xml = XmlWriter::new();

        xml.open_with("root", &format!("version=\"{}\"", ROOT_VERSION));
        xml.open("character");

        xml.field("name", "string", record.name());
        xml.field("level", "number", record.level().value());
        xml.field(
            "ancestry",
            "string",
            record.ancestry().map(|a| a.as_str()).unwrap_or_default(),
        );
        xml.field("path", "string", record.path().map(|p| p.as_str()).unwrap_or_default());
        xml.field(
            "pathfocus",
            "string",
            record.path_focus().map(|f| f.as_str()).unwrap_or_default(),
        );

        xml.open("attributes");
        for stat in Stat::ALL {
            xml.field(
                &stat.display_name().to_lowercase(),
                "number",
                record.stats().get(stat),
            );
        }
        xml.close("attributes");

        xml.open("defenses");
        xml.field("physical", "number", derived.defenses.physical);
        xml.field("cognitive", "number", derived.defenses.cognitive);
        xml.field("spiritual", "number", derived.defenses.spiritual);
        xml.close("defenses");

        xml.field("movement", "number", derived.movement.rate_ft_per_action);
        xml.field(
            "recoverydie",
            "dice",
            fg_die(&derived.movement.recovery_die.notation()),
        );
        xml.field("senses", "string", derived.senses.range);
        xml.field("liftingcapacity", "number", derived.capacities.lifting);
        xml.field("carryingcapacity", "number", derived.capacities.carrying);

        xml.open("expertiselist");
        let expertises = record
            .cultural_expertises()
            .iter()
            .chain(record.general_expertises());
        for (index, expertise) in expertises.enumerate() {
            let id = list_id(index);
            xml.open(&id);
            xml.field("name", "string", expertise.as_str());
            xml.field("category", "string", expertise.category());
            xml.close(&id);
        }
        xml.close("expertiselist");

        xml.open("talentlist");
        for (index, talent) in talents(record).iter().enumerate() {
            let id = list_id(index);
            xml.open(&id);
            xml.field("name", "string", talent);
            xml.close(&id);
        }
        xml.close("talentlist");

        xml.open("skilllist");
        for (index, (skill, line)) in derived.skills.iter().enumerate() {
            let id = list_id(index);
            xml.open(&id);
            xml.field("name", "string", skill.as_str());
            xml.field("rank", "number", line.effective);
            xml.field("attribute", "string", line.attribute.as_str());
            xml.field("total", "number", line.check_value);
            xml.close(&id);
        }
        xml.close("skilllist");

        xml.close("character");
        xml.close("root");
        xml.finish()
    }
}
