// src/noyau/pile.rs
//
// Pile de construction (postfixe) : seul moyen pour l'UI de bâtir un arbre.
// - empiler_entier("4"), empiler_entier("8"), appliquer(Op::Plus) => Plus(IntConst(4), IntConst(8))
//
// Règles :
// - appliquer() dépile DROITE puis GAUCHE (ordre postfixe).
// - Une erreur laisse la pile inchangée.
// - Garde-fous : PILE_MAX éléments, CHIFFRES_MAX chiffres par entier.

use num_bigint::BigInt;
use num_traits::Num;
use thiserror::Error;

use super::expr::{Expr, IntConst, Op};

/// Garde-fou : nombre maximal d'éléments sur la pile.
pub const PILE_MAX: usize = 256;

/// Garde-fou : nombre maximal de chiffres d'un entier saisi.
pub const CHIFFRES_MAX: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurPile {
    #[error("pile vide")]
    PileVide,

    #[error("pile pleine ({max} éléments)")]
    PilePleine { max: usize },

    #[error("{op} demande 2 opérandes, {presents} sur la pile")]
    OperandesManquants { op: Op, presents: usize },

    #[error("entier invalide : {0:?}")]
    EntierInvalide(String),

    #[error("entier trop long ({chiffres} chiffres, max {max})")]
    EntierTropLong { chiffres: usize, max: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    elements: Vec<Expr>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn sommet(&self) -> Option<&Expr> {
        self.elements.last()
    }

    /// Du fond vers le sommet.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Expr> {
        self.elements.iter()
    }

    pub fn vider(&mut self) {
        self.elements.clear();
    }

    pub fn empiler(&mut self, expr: Expr) -> Result<(), ErreurPile> {
        if self.elements.len() >= PILE_MAX {
            return Err(ErreurPile::PilePleine { max: PILE_MAX });
        }
        tracing::debug!(elements = self.elements.len() + 1, "empiler");
        self.elements.push(expr);
        Ok(())
    }

    /// Lit UN littéral entier décimal (signe optionnel) et l'empile en IntConst.
    pub fn empiler_entier(&mut self, texte: &str) -> Result<(), ErreurPile> {
        let n = lire_entier(texte)?;
        self.empiler(Expr::IntConst(IntConst::new(n)))
    }

    /// Combine les deux éléments du sommet : gauche = avant-dernier, droite = dernier.
    pub fn appliquer(&mut self, op: Op) -> Result<(), ErreurPile> {
        if self.elements.len() < 2 {
            return Err(ErreurPile::OperandesManquants {
                op,
                presents: self.elements.len(),
            });
        }

        let droite = self.depiler()?;
        let gauche = self.depiler()?;
        let e = Expr::binop(op, gauche, droite);
        tracing::debug!(op = op.nom(), elements = self.elements.len() + 1, "appliquer");

        // deux places viennent d'être libérées : ne peut pas déborder
        self.empiler(e)
    }

    pub fn depiler(&mut self) -> Result<Expr, ErreurPile> {
        self.elements.pop().ok_or(ErreurPile::PileVide)
    }
}

/// Littéral entier décimal : espaces autour ignorés, signe optionnel, chiffres ASCII seulement.
pub fn lire_entier(texte: &str) -> Result<BigInt, ErreurPile> {
    let s = texte.trim();
    let chiffres = s.strip_prefix(['+', '-']).unwrap_or(s);

    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErreurPile::EntierInvalide(texte.to_string()));
    }
    if chiffres.len() > CHIFFRES_MAX {
        return Err(ErreurPile::EntierTropLong {
            chiffres: chiffres.len(),
            max: CHIFFRES_MAX,
        });
    }

    BigInt::from_str_radix(s, 10).map_err(|_| ErreurPile::EntierInvalide(texte.to_string()))
}
