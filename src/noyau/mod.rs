//! Noyau — modèle d'expressions entières
//!
//! Organisation interne :
//! - expr.rs     : AST fermé (IntConst, BinOp{Plus, Times}) + métriques
//! - eval.rs     : évaluation post-ordre itérative + démarche
//! - format.rs   : notation algébrique (Display) + écho constructeur (Debug)
//! - pile.rs     : pile de construction postfixe (utilisée par l'UI)

pub mod eval;
pub mod expr;
pub mod format;
pub mod pile;


#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use eval::{eval_avec_demarche, eval_expr, Etape};
pub use expr::{BinOp, Expr, IntConst, Op};
pub use format::{format_algebrique, format_constructeur};
pub use pile::{ErreurPile, Pile};
