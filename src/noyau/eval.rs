//! Noyau — évaluation
//!
//! Parcours post-ordre ITÉRATIF (pile explicite, pas de récursion native) :
//! gauche, puis droite, puis combinaison du nœud.
//!
//! L'ordre gauche avant droite est un contrat (déterminisme), même si
//! l'évaluation n'a aucun effet de bord aujourd'hui.

use std::fmt;

use num_bigint::BigInt;

use super::expr::{BinOp, Expr, IntConst, Op};

/// Une étape de la démarche : un nœud binaire combiné.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub op: Op,
    pub gauche: BigInt,
    pub droite: BigInt,
    pub resultat: BigInt,
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.gauche,
            self.op.symbole(),
            self.droite,
            self.resultat
        )
    }
}

/// API publique : évalue un arbre et retourne toujours une IntConst.
pub fn eval_expr(expr: &Expr) -> IntConst {
    let valeur = replier(expr, |c| c.valeur().clone(), |b, g, d| b.op().appliquer(&g, &d));
    tracing::trace!(taille = expr.taille(), %valeur, "évaluation");
    IntConst::from(valeur)
}

/// Comme `eval_expr`, et accumule une étape par nœud binaire (post-ordre).
pub fn eval_avec_demarche(expr: &Expr) -> (IntConst, Vec<Etape>) {
    let mut etapes: Vec<Etape> = Vec::new();

    let valeur = replier(
        expr,
        |c| c.valeur().clone(),
        |b, g, d| {
            let resultat = b.op().appliquer(&g, &d);
            etapes.push(Etape {
                op: b.op(),
                gauche: g,
                droite: d,
                resultat: resultat.clone(),
            });
            resultat
        },
    );

    (IntConst::from(valeur), etapes)
}

/// Repli post-ordre générique.
///
/// `Entrer` empile les enfants (droite d'abord, pour dépiler gauche d'abord),
/// `Sortir` combine les deux derniers résultats.
pub(crate) fn replier<T>(
    expr: &Expr,
    mut feuille: impl FnMut(&IntConst) -> T,
    mut noeud: impl FnMut(&BinOp, T, T) -> T,
) -> T {
    #[derive(Copy, Clone)]
    enum Marque<'a> {
        Entrer(&'a Expr),
        Sortir(&'a BinOp),
    }

    let mut pile: Vec<Marque<'_>> = Vec::with_capacity(64);
    let mut res: Vec<T> = Vec::with_capacity(64);

    pile.push(Marque::Entrer(expr));

    while let Some(m) = pile.pop() {
        match m {
            Marque::Entrer(Expr::IntConst(c)) => res.push(feuille(c)),
            Marque::Entrer(Expr::BinOp(b)) => {
                pile.push(Marque::Sortir(b));
                pile.push(Marque::Entrer(b.droite()));
                pile.push(Marque::Entrer(b.gauche()));
            }
            Marque::Sortir(b) => {
                // chaque Sortir suit exactement deux sous-arbres terminés
                let (Some(d), Some(g)) = (res.pop(), res.pop()) else {
                    unreachable!("parcours post-ordre déséquilibré");
                };
                res.push(noeud(b, g, d));
            }
        }
    }

    match (res.pop(), res.is_empty()) {
        (Some(v), true) => v,
        _ => unreachable!("parcours post-ordre déséquilibré"),
    }
}
