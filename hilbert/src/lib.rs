#![no_std]
#![forbid(unsafe_code)]

//! Verification of Hilbert-style proofs with definitions.
//!
//! This library checks proofs in the style of Metamath,
//! extended by *definitions*: operators that abbreviate expressions
//! and that are unfolded on demand when comparing expressions.
//!
//! # Usage
//!
//! A logic is built up in a [`Namespace`] by declaring
//! kinds (such as well-formed formulas),
//! operators (such as implication),
//! variables, and statements (axioms and previously proven theorems).
//! A [`Theorem`] to be proven consists of labelled hypotheses and a consequent.
//! Its proof is a sequence of [`ProofStep`]s, each of which either
//! pushes an expression or applies a named hypothesis, variable, or statement.
//! The [`Verifier`] executes these steps and, once the proof is finished,
//! checks that the proven expression matches the consequent
//! and that the theorem declares sufficient distinct variable conditions.
//!
//! The following example proves `p -> p` from
//! the Łukasiewicz axioms `ax-1` and `ax-2` and modus ponens.
//! (Like all code examples in this library, it is run by `cargo test`.)
//!
//! ~~~
//! # use hilbert::{verify, Config, DvSet, Error, Expr, Fresh, Namespace, ProofStep, Statement, Theorem};
//! let fresh = Fresh::new();
//! let mut ns = Namespace::new();
//! let wff = ns.add_kind("wff", &fresh)?;
//! ns.add_functor("->", wff.clone(), vec![wff.clone(); 2], &fresh)?;
//! let [p, q, r] = ["p", "q", "r"].map(|n| ns.add_variable(n, wff.clone(), &fresh).map(Expr::var));
//! let (p, q, r) = (p?, q?, r?);
//! let imp = |a: &Expr, b: &Expr| ns.appl("->", vec![a.clone(), b.clone()]);
//!
//! let no_dv = DvSet::new();
//! let ax1 = imp(&p, &imp(&q, &p)?)?;
//! let ax2 = imp(&imp(&p, &imp(&q, &r)?)?, &imp(&imp(&p, &q)?, &imp(&p, &r)?)?)?;
//! let mp = [p.clone(), imp(&p, &q)?];
//! let axioms = [
//!     Statement::new("ax-1", &no_dv, &[], &ax1, &fresh),
//!     Statement::new("ax-2", &no_dv, &[], &ax2, &fresh),
//!     Statement::new("ax-mp", &no_dv, &mp, &q, &fresh),
//! ];
//! let pp = imp(&p, &p)?;
//! let thm = Theorem::new("id", pp.clone());
//! for ax in axioms {
//!     ns.add_statement(ax)?;
//! }
//!
//! let proof = [
//!     // p -> (p -> p)
//!     "p", "p", "ax-1",
//!     // p -> ((p -> p) -> p)
//!     "p", "pp", "ax-1",
//!     // (p -> ((p -> p) -> p)) -> ((p -> (p -> p)) -> (p -> p))
//!     "p", "pp", "p", "ax-2",
//!     // (p -> (p -> p)) -> (p -> p)
//!     "ax-mp",
//!     "ax-mp",
//! ];
//! let steps = proof.iter().map(|s| match *s {
//!     "pp" => ProofStep::Literal(pp.clone()),
//!     label => ProofStep::from(label),
//! });
//! let statement = verify(&thm, steps, &ns, &fresh, Config::default())?;
//! assert_eq!(statement.name(), "id");
//! # Ok::<_, Error>(())
//! ~~~
//!
//! # Organisation
//!
//! * Expressions ([`Expr`]) are trees of operator applications
//!   with variables at their leaves.
//! * Expressions are compared by [`matches`] and [`unify()`],
//!   both of which unfold definitions where necessary.
//! * The [`scope`] module resolves names and decides
//!   which kinds and operators are equivalent.
//! * The [`verify`](mod@verify) module executes proofs.
//!
//! All data structures implement `Send` and `Sync`,
//! so that several theorems can be verified in parallel
//! against the same namespace.

extern crate alloc;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate std;

pub mod dv;
pub mod error;
pub mod expr;
mod kind;
mod matching;
mod operator;
pub mod scope;
mod stack;
pub mod statement;
mod subst;
pub mod unify;
mod var;
pub mod verify;

#[cfg(test)]
mod testing;

pub use dv::DvSet;
pub use error::Error;
pub use expr::{Appl, Expr};
pub use kind::Kind;
pub use matching::{dummy_matches, dummy_matches_with_fuel, matches, matches_with_fuel};
pub use operator::{Definition, Operator, OperatorC};
pub use scope::{Namespace, Scope, Symbol};
pub use stack::Stack;
pub use statement::{Statement, Theorem};
pub use subst::{Subst, Translation};
pub use unify::{equality_map, equality_map_with_fuel, unify, unify_with_fuel};
pub use var::{Fresh, Origin, Var};
pub use verify::{verify, Config, ProofStep, Reason, Reject, State, Verifier};
