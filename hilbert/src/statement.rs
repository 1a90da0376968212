//! Statements (axioms and proven theorems) and theorems to be proven.

use crate::{DvSet, Expr, Fresh, Subst, Var};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// two hypotheses of a theorem carry the same label
    DuplicateLabel(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DuplicateLabel(label) => write!(f, "duplicate hypothesis label {}", label),
        }
    }
}

/// Canonical form of an axiom or a theorem,
/// ready to be used in proofs.
///
/// All named variables are replaced by fresh unnamed variables,
/// so that no two statements share variables.
#[derive(Clone, Debug)]
pub struct Statement {
    name: String,
    dv: DvSet,
    hypotheses: Vec<Expr>,
    consequent: Expr,
    mandatory: Vec<Var>,
}

impl Statement {
    /// Create a statement.
    ///
    /// DV pairs on variables that occur neither in the hypotheses
    /// nor in the consequent are dropped.
    ///
    /// ~~~
    /// # use hilbert::{DvSet, Expr, Fresh, Namespace, Statement};
    /// let fresh = Fresh::new();
    /// let mut ns = Namespace::new();
    /// let wff = ns.add_kind("wff", &fresh)?;
    /// ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
    /// let p = ns.add_variable("p", wff.clone(), &fresh)?;
    /// let q = ns.add_variable("q", wff, &fresh)?;
    /// let (ep, eq) = (Expr::var(p.clone()), Expr::var(q.clone()));
    ///
    /// // ax-1: |- p -> q -> p
    /// let ax1 = ns.appl("->", vec![ep.clone(), ns.appl("->", vec![eq, ep])?])?;
    /// let ax1 = Statement::new("ax-1", &DvSet::new(), &[], &ax1, &fresh);
    /// assert_eq!(ax1.mandatory().len(), 2);
    /// assert!(ax1.mandatory().iter().all(|v| !v.is_named()));
    /// assert!(!ax1.mandatory().contains(&p));
    /// # Ok::<_, hilbert::Error>(())
    /// ~~~
    pub fn new(
        name: impl Into<String>,
        dv: &DvSet,
        hypotheses: &[Expr],
        consequent: &Expr,
        fresh: &Fresh,
    ) -> Self {
        let name = name.into();

        let hyp_vars: Vec<Var> = hypotheses.iter().flat_map(|h| h.variables()).collect();
        let con_vars = consequent.variables();
        let all: FnvHashSet<Var> = hyp_vars.iter().chain(&con_vars).cloned().collect();

        let restricted = dv.restricted(&all);
        if restricted.len() != dv.len() {
            warn!(
                "statement {}: dropping DV constraints on variables that do not occur in it",
                name
            );
            debug!("DV constraints now: {}", restricted);
        }

        let mut renaming = FnvHashMap::default();
        for v in hyp_vars.iter().chain(&con_vars).filter(|v| v.is_named()) {
            renaming
                .entry(v.clone())
                .or_insert_with(|| fresh.unnamed(v.kind().clone()));
        }
        let rename = |v: &Var| renaming.get(v).unwrap_or(v).clone();
        let subst: Subst = renaming
            .iter()
            .map(|(from, to)| (from.clone(), Expr::var(to.clone())))
            .collect();

        let hyp_set: FnvHashSet<&Var> = hyp_vars.iter().collect();
        let mandatory = con_vars
            .iter()
            .filter(|v| !hyp_set.contains(v))
            .map(rename)
            .collect();

        Self {
            dv: restricted.map_vars(rename),
            hypotheses: hypotheses.iter().map(|h| h.subst(&subst)).collect(),
            consequent: consequent.subst(&subst),
            mandatory,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dv(&self) -> &DvSet {
        &self.dv
    }

    pub fn hypotheses(&self) -> &[Expr] {
        &self.hypotheses
    }

    pub fn consequent(&self) -> &Expr {
        &self.consequent
    }

    /// Variables of the consequent that do not occur in any hypothesis,
    /// in order of first occurrence.
    pub fn mandatory(&self) -> &[Var] {
        &self.mandatory
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} (", self.name, self.dv)?;
        for (i, h) in self.hypotheses.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", h)?;
        }
        write!(f, ") {}", self.consequent)
    }
}

/// Claim to be proven.
///
/// Unlike a [`Statement`], a theorem refers to named variables,
/// and its hypotheses carry labels by which proofs refer to them.
#[derive(Clone, Debug)]
pub struct Theorem {
    pub name: String,
    pub dv: DvSet,
    pub hypotheses: Vec<(String, Expr)>,
    pub consequent: Expr,
}

impl Theorem {
    pub fn new(name: impl Into<String>, consequent: Expr) -> Self {
        Self {
            name: name.into(),
            dv: DvSet::new(),
            hypotheses: Vec::new(),
            consequent,
        }
    }

    /// Add a labelled hypothesis.
    pub fn hypothesis(mut self, label: impl Into<String>, expr: Expr) -> Result<Self, Error> {
        let label = label.into();
        if self.get_hypothesis(&label).is_some() {
            return Err(Error::DuplicateLabel(label));
        }
        self.hypotheses.push((label, expr));
        Ok(self)
    }

    pub fn get_hypothesis(&self, label: &str) -> Option<&Expr> {
        self.hypotheses
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, h)| h)
    }

    /// Return the statement that the theorem yields once proven.
    pub fn statement(&self, fresh: &Fresh) -> Statement {
        let hyps: Vec<Expr> = self.hypotheses.iter().map(|(_, h)| h.clone()).collect();
        Statement::new(self.name.clone(), &self.dv, &hyps, &self.consequent, fresh)
    }
}
