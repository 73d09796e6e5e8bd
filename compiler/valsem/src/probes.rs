//! The probe catalogue.
//!
//! A probe sets up a small scenario over boxed values or shared sequences
//! and records one [`Check`] per observed comparison. Probes never assert;
//! the verdicts are the output.

use std::cmp::Ordering;
use std::fmt;

use valsem_alias::{AliasGraph, HashSetModel};
use valsem_float::{boxed_cmp, greater_than, less_than, value_equals};
use valsem_intern::{InternPolicy, InternPool};
use valsem_value::{BoxedValue, EnumType, Primitive};

use crate::CliError;

/// What a single check observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Bool(bool),
    Text(String),
}

impl From<bool> for Outcome {
    fn from(value: bool) -> Self {
        Outcome::Bool(value)
    }
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        Outcome::Text(value)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bool(b) => write!(f, "{b}"),
            Outcome::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub label: String,
    pub outcome: Outcome,
}

/// Verdicts of one probe, in the order they were observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    pub name: &'static str,
    pub summary: &'static str,
    pub checks: Vec<Check>,
}

impl ProbeReport {
    fn new(name: &'static str, summary: &'static str) -> Self {
        ProbeReport {
            name,
            summary,
            checks: Vec::new(),
        }
    }

    fn check(&mut self, label: impl Into<String>, outcome: impl Into<Outcome>) {
        self.checks.push(Check {
            label: label.into(),
            outcome: outcome.into(),
        });
    }

    /// First outcome recorded under `label`.
    pub fn outcome(&self, label: &str) -> Option<&Outcome> {
        self.checks
            .iter()
            .find(|check| check.label == label)
            .map(|check| &check.outcome)
    }

    /// All outcomes recorded under `label`, in order.
    pub fn outcomes<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Outcome> + 'a {
        self.checks
            .iter()
            .filter(move |check| check.label == label)
            .map(|check| &check.outcome)
    }
}

pub type ProbeFn = fn(&InternPool) -> Result<ProbeReport, CliError>;

pub struct Probe {
    pub name: &'static str,
    pub run: ProbeFn,
}

pub const PROBES: &[Probe] = &[
    Probe {
        name: "autoboxing",
        run: autoboxing,
    },
    Probe {
        name: "booleans",
        run: booleans,
    },
    Probe {
        name: "enums",
        run: enums,
    },
    Probe {
        name: "strings",
        run: strings,
    },
    Probe {
        name: "numbers",
        run: numbers,
    },
    Probe {
        name: "arrays",
        run: arrays,
    },
    Probe {
        name: "collections",
        run: collections,
    },
    Probe {
        name: "mutable-key",
        run: mutable_key,
    },
];

/// `[a, b, c]` from the items' `Display`.
fn render<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

fn ordering_sign(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn autoboxing(pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "autoboxing",
        "auto-boxed small ints share one instance; larger ones do not",
    );

    let a = BoxedValue::auto(42, pool);
    let b = BoxedValue::auto(42, pool);
    report.check("a == b", a.identical_to(&b)?);
    report.check("a == 42", a.unboxed_equals(&Primitive::Int(42))?);
    report.check("a.equals(b)", a.value_equals(&b));

    let c = BoxedValue::auto(666, pool);
    let d = BoxedValue::auto(666, pool);
    report.check("c == d", c.identical_to(&d)?);
    report.check("c == 666", c.unboxed_equals(&Primitive::Int(666))?);
    report.check("c.equals(d)", c.value_equals(&d));

    let t = BoxedValue::auto(true, pool);
    let s = BoxedValue::auto(true, pool);
    report.check("t == s", t.identical_to(&s)?);
    report.check("t == true", t.unboxed_equals(&Primitive::Bool(true))?);
    Ok(report)
}

pub fn booleans(pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "booleans",
        "constructed booleans are distinct; value_of booleans are the constants",
    );

    let a = Primitive::Bool(true);
    let b = Primitive::Bool(true);
    let big_a = BoxedValue::fresh(true, pool);
    let big_b = BoxedValue::fresh(true, pool);
    let c = BoxedValue::auto(true, pool);
    let d = BoxedValue::auto(true, pool);
    let constant = BoxedValue::auto(true, pool);

    report.check("a == b", a.primitive_equals(&b)?);
    report.check("a == B", big_b.unboxed_equals(&a)?);
    report.check("A == B", big_a.identical_to(&big_b)?);
    report.check("C == D", c.identical_to(&d)?);
    report.check("a == TRUE", constant.unboxed_equals(&a)?);
    report.check("A == TRUE", big_a.identical_to(&constant)?);
    report.check("C == TRUE", c.identical_to(&constant)?);
    report.check("A.equals(B)", big_a.value_equals(&big_b));
    report.check(
        "A.equals(true)",
        big_a.value_equals(&BoxedValue::auto(true, pool)),
    );
    report.check("A.equals(TRUE)", big_a.value_equals(&constant));
    Ok(report)
}

pub fn enums(pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "enums",
        "every lookup of an enum constant yields the one instance",
    );

    let quiz = EnumType::declare("EnumQuiz", &["FOO", "BAR"], pool);
    let foo = quiz.value_of("FOO")?;
    let a = foo.clone();
    let c = quiz.value_of("FOO")?;
    // Even a forced fresh box of an enum constant is the constant.
    let d = BoxedValue::boxed(foo.value().clone(), InternPolicy::ForceFresh, pool);

    report.check("a == FOO", a.identical_to(&foo)?);
    report.check("a.equals(FOO)", a.value_equals(&foo));
    report.check("FOO.equals(a)", foo.value_equals(&a));
    report.check("a == c", a.identical_to(&c)?);
    report.check("a.equals(c)", a.value_equals(&c));
    report.check("c.equals(a)", c.value_equals(&a));
    report.check("a == d", a.identical_to(&d)?);
    report.check("a.equals(d)", a.value_equals(&d));
    report.check("d.equals(a)", d.value_equals(&a));
    Ok(report)
}

pub fn strings(pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "strings",
        "literals are pooled; constructed strings are not; concat returns a new string",
    );

    let a = BoxedValue::fresh("a", pool);
    let b = BoxedValue::fresh("a", pool);
    let literal = BoxedValue::auto("a", pool);

    report.check(
        "\"a\" == \"a\"",
        literal.identical_to(&BoxedValue::auto("a", pool))?,
    );
    report.check("a == \"a\"", a.identical_to(&literal)?);
    report.check("a == b", a.identical_to(&b)?);
    report.check("a.equals(b)", a.value_equals(&b));

    // The result is discarded; `a` is unchanged.
    let _ = a.concat("b", pool)?;
    report.check("a", a.to_string());
    report.check("a == b", a.identical_to(&b)?);
    report.check("a.equals(b)", a.value_equals(&b));
    Ok(report)
}

pub fn numbers(pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "numbers",
        "primitive comparisons follow IEEE 754; boxed equality compares type and bits; \
         integer overflow wraps",
    );

    let sf = 0.2_f32 + 0.2 + 0.2;
    let sd = 0.2_f64 + 0.2 + 0.2;

    report.check(
        "A",
        Primitive::Double(0.2).primitive_equals(&Primitive::Float(0.2))?,
    );
    report.check(
        "B",
        Primitive::Double(0.5).primitive_equals(&Primitive::Float(0.5))?,
    );
    report.check("sf", format!("{sf:?}"));
    report.check("sd", format!("{sd:?}"));
    report.check(
        "C",
        Primitive::Double(0.0).primitive_equals(&Primitive::Float(0.0))?,
    );
    report.check(
        "D",
        Primitive::Double(0.0).primitive_equals(&Primitive::Float(-0.0))?,
    );
    report.check("E", value_equals(0.0_f64, -0.0));

    let zero = BoxedValue::fresh(0.0_f64, pool);
    report.check("F", zero.value_equals(&BoxedValue::auto(0.0_f32, pool)));
    report.check("G", zero.value_equals(&BoxedValue::auto(-0.0_f32, pool)));
    report.check("H", zero.value_equals(&BoxedValue::auto(-0.0_f64, pool)));

    report.check("I", value_equals(f64::NAN, f64::NAN));
    report.check("J", greater_than(f64::NAN, 0.0));
    report.check("K", less_than(f64::NAN, 0.0));
    report.check(
        "L",
        BoxedValue::fresh(f64::NAN, pool).value_equals(&BoxedValue::auto(f64::NAN, pool)),
    );
    report.check("M", ordering_sign(boxed_cmp(0.0_f64, f64::NAN)).to_string());

    let widened = i32::from(i16::MAX) + 1;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing back to i16 wraps"
    )]
    let s = widened as i16;
    report.check("N", i16::MAX.to_string());
    report.check("O", widened.to_string());
    report.check("P", s.to_string());
    report.check("Q", i32::MAX.to_string());
    report.check("R", i32::MAX.wrapping_add(1).to_string());
    Ok(report)
}

pub fn arrays(_pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "arrays",
        "sorting through one alias reorders every alias of the same array",
    );

    let mut graph = AliasGraph::new();
    let i = graph.alloc(vec![3, 2, 1]);
    let k = graph.share(&i)?;
    report.check("i", render(graph.read(&i)?));
    report.check("k", render(graph.read(&k)?));

    graph.sort(&i)?;
    let j = graph.share(&i)?;
    report.check("i", render(graph.read(&i)?));
    report.check("j", render(graph.read(&j)?));
    report.check("k", render(graph.read(&k)?));

    for handle in [i, j, k] {
        graph.release(handle)?;
    }
    Ok(report)
}

pub fn collections(_pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "collections",
        "a sorted and extended list is visible through every alias",
    );

    let mut graph = AliasGraph::new();
    let a = graph.alloc(vec!["b", "a", "c"]);
    graph.sort(&a)?;
    let b = graph.share(&a)?;
    let c = graph.share(&a)?;
    graph.mutate_in_place(&c, |items| items.insert(0, "d"))?;

    report.check("a", render(graph.read(&a)?));
    report.check("b", render(graph.read(&b)?));
    report.check("c", render(graph.read(&c)?));

    for handle in [a, b, c] {
        graph.release(handle)?;
    }
    Ok(report)
}

pub fn mutable_key(_pool: &InternPool) -> Result<ProbeReport, CliError> {
    let mut report = ProbeReport::new(
        "mutable-key",
        "a set member mutated through an alias is no longer found",
    );

    let mut graph = AliasGraph::new();
    let strings = graph.alloc(vec!["zoo", "foo", "bar"]);
    let list = graph.share(&strings)?;
    let mut set = HashSetModel::new();
    set.insert(&mut graph, &list)?;

    report.check("set.size()", set.len().to_string());
    report.check("set.contains(list)", set.contains(&graph, &list)?);
    report.check("list", render(graph.read(&list)?));

    graph.sort(&strings)?;
    report.check("list", render(graph.read(&list)?));
    report.check("set.contains(list)", set.contains(&graph, &list)?);
    report.check("stale entries", set.audit(&graph)?.len().to_string());

    set.release_all(&mut graph)?;
    graph.release(list)?;
    graph.release(strings)?;
    Ok(report)
}

#[cfg(test)]
mod tests;
