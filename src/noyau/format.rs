// src/noyau/format.rs
//
// Deux projections texte, indépendantes :
// - algébrique   : "((4 + 5) + 3)"  (Display)
// - constructeur : "Plus(IntConst(7), Plus(IntConst(4), IntConst(2)))"  (Debug)
//
// Parcours itératif (pile de morceaux) : pas de récursion native.

use std::fmt;

use super::expr::{BinOp, Expr, IntConst, Op};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    Algebrique,
    Constructeur,
}

/// Notation algébrique, entièrement parenthésée.
pub fn format_algebrique(expr: &Expr) -> String {
    let mut s = String::new();
    // fmt::Write sur String ne peut pas échouer
    let _ = ecrire(&mut s, expr, Notation::Algebrique);
    s
}

/// Écho constructeur : reconstruit l'arbre à la lecture.
pub fn format_constructeur(expr: &Expr) -> String {
    let mut s = String::new();
    let _ = ecrire(&mut s, expr, Notation::Constructeur);
    s
}

fn ecrire<W: fmt::Write>(out: &mut W, expr: &Expr, notation: Notation) -> fmt::Result {
    enum Morceau<'a> {
        Noeud(&'a Expr),
        Texte(&'static str),
        Symbole(Op),
    }

    let mut pile: Vec<Morceau<'_>> = Vec::with_capacity(64);
    pile.push(Morceau::Noeud(expr));

    while let Some(m) = pile.pop() {
        match m {
            Morceau::Texte(t) => out.write_str(t)?,
            Morceau::Symbole(op) => write!(out, " {} ", op.symbole())?,

            Morceau::Noeud(Expr::IntConst(c)) => match notation {
                Notation::Algebrique => write!(out, "{}", c.valeur())?,
                Notation::Constructeur => write!(out, "IntConst({})", c.valeur())?,
            },

            // ordre inverse : la pile ressort gauche, séparateur, droite, fermeture
            Morceau::Noeud(Expr::BinOp(b)) => match notation {
                Notation::Algebrique => {
                    out.write_str("(")?;
                    pile.push(Morceau::Texte(")"));
                    pile.push(Morceau::Noeud(b.droite()));
                    pile.push(Morceau::Symbole(b.op()));
                    pile.push(Morceau::Noeud(b.gauche()));
                }
                Notation::Constructeur => {
                    write!(out, "{}(", b.op().nom())?;
                    pile.push(Morceau::Texte(")"));
                    pile.push(Morceau::Noeud(b.droite()));
                    pile.push(Morceau::Texte(", "));
                    pile.push(Morceau::Noeud(b.gauche()));
                }
            },
        }
    }

    Ok(())
}

/* ------------------------ Display (algébrique) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ecrire(f, self, Notation::Algebrique)
    }
}

impl fmt::Display for IntConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.valeur())
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.gauche(), self.op().symbole(), self.droite())
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/* ------------------------ Debug (écho constructeur) ------------------------ */

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ecrire(f, self, Notation::Constructeur)
    }
}

impl fmt::Debug for IntConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntConst({})", self.valeur())
    }
}

impl fmt::Debug for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}, {:?})", self.op().nom(), self.gauche(), self.droite())
    }
}
