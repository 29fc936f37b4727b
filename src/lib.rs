//! Arbre d'expressions entières : constantes, Plus, Times.
//!
//! ```
//! use arbre_expr::{Expr, IntConst};
//!
//! let e = Expr::plus(IntConst::new(7), Expr::plus(IntConst::new(2), IntConst::new(3)));
//! assert_eq!(e.eval(), IntConst::new(12));
//! assert_eq!(e.to_string(), "(7 + (2 + 3))");
//! assert_eq!(format!("{e:?}"), "Plus(IntConst(7), Plus(IntConst(2), IntConst(3)))");
//! ```

pub mod noyau;

pub use noyau::*;
