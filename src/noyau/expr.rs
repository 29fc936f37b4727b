// src/noyau/expr.rs
//
// AST entier (sans flottants, sans variables).
// - IntConst : constante entière exacte (BigInt)
// - BinOp    : opération binaire (Plus, Times) sur deux sous-arbres possédés
//
// IMPORTANT :
// - Ensemble de variantes FERMÉ : pas de base abstraite instanciable.
// - Nœuds immuables : champs privés, lecture seule via accesseurs.
// - Arbre strict : chaque enfant est un Box possédé, pas de partage, pas de cycle.
// - Clone / PartialEq / Hash / Drop itératifs : la profondeur n'est pas bornée
//   (Pile borne le nombre d'éléments, pas la profondeur de chacun).

use std::hash::{Hash, Hasher};

use num_bigint::BigInt;

/* ------------------------ Constante entière ------------------------ */

/// Feuille de l'arbre, et forme canonique de tout résultat d'évaluation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntConst {
    valeur: BigInt,
}

impl IntConst {
    pub fn new(valeur: impl Into<BigInt>) -> Self {
        Self {
            valeur: valeur.into(),
        }
    }

    pub fn valeur(&self) -> &BigInt {
        &self.valeur
    }

    pub fn into_valeur(self) -> BigInt {
        self.valeur
    }

    /// Point fixe de l'évaluation.
    pub fn eval(&self) -> IntConst {
        self.clone()
    }
}

impl From<BigInt> for IntConst {
    fn from(valeur: BigInt) -> Self {
        Self { valeur }
    }
}

/* ------------------------ Opérateurs binaires ------------------------ */

/// Opérateur d'un nœud binaire : symbole, nom et fonction de combinaison
/// sont des constantes de variante, pas des champs par instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Times,
}

impl Op {
    /// Symbole de la notation algébrique.
    pub const fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Times => "*",
        }
    }

    /// Nom utilisé par l'écho constructeur.
    pub const fn nom(self) -> &'static str {
        match self {
            Op::Plus => "Plus",
            Op::Times => "Times",
        }
    }

    /// Fonction de combinaison (exacte, jamais de débordement).
    pub fn appliquer(self, gauche: &BigInt, droite: &BigInt) -> BigInt {
        match self {
            Op::Plus => gauche + droite,
            Op::Times => gauche * droite,
        }
    }
}

/* ------------------------ Nœud binaire ------------------------ */

pub struct BinOp {
    op: Op,
    gauche: Box<Expr>,
    droite: Box<Expr>,
}

impl BinOp {
    /// Les enfants ne sont PAS évalués ici.
    pub fn new(op: Op, gauche: impl Into<Expr>, droite: impl Into<Expr>) -> Self {
        Self {
            op,
            gauche: Box::new(gauche.into()),
            droite: Box::new(droite.into()),
        }
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn gauche(&self) -> &Expr {
        &self.gauche
    }

    pub fn droite(&self) -> &Expr {
        &self.droite
    }
}

/* ------------------------ Expression ------------------------ */

/// Égalité structurelle : deux arbres identiques sont égaux, une feuille
/// n'est jamais égale à un nœud binaire, Plus(1, 2) != Plus(2, 1).
pub enum Expr {
    IntConst(IntConst),
    BinOp(BinOp),
}

impl Expr {
    pub fn int_const(valeur: impl Into<BigInt>) -> Expr {
        Expr::IntConst(IntConst::new(valeur))
    }

    pub fn binop(op: Op, gauche: impl Into<Expr>, droite: impl Into<Expr>) -> Expr {
        Expr::BinOp(BinOp::new(op, gauche, droite))
    }

    pub fn plus(gauche: impl Into<Expr>, droite: impl Into<Expr>) -> Expr {
        Expr::binop(Op::Plus, gauche, droite)
    }

    pub fn times(gauche: impl Into<Expr>, droite: impl Into<Expr>) -> Expr {
        Expr::binop(Op::Times, gauche, droite)
    }

    /// Évaluation structurelle (post-ordre, gauche avant droite).
    pub fn eval(&self) -> IntConst {
        super::eval::eval_expr(self)
    }

    /// Nombre de nœuds (itératif).
    pub fn taille(&self) -> usize {
        let mut pile: Vec<&Expr> = vec![self];
        let mut n = 0;
        while let Some(e) = pile.pop() {
            n += 1;
            if let Expr::BinOp(b) = e {
                pile.push(b.droite());
                pile.push(b.gauche());
            }
        }
        n
    }

    /// Profondeur : 1 pour une feuille (itératif).
    pub fn profondeur(&self) -> usize {
        let mut pile: Vec<(&Expr, usize)> = vec![(self, 1)];
        let mut max = 0;
        while let Some((e, niveau)) = pile.pop() {
            max = max.max(niveau);
            if let Expr::BinOp(b) = e {
                pile.push((b.droite(), niveau + 1));
                pile.push((b.gauche(), niveau + 1));
            }
        }
        max
    }
}

/* ------------------------ Traits itératifs (sans récursion native) ------------------------ */

impl Clone for Expr {
    fn clone(&self) -> Self {
        super::eval::replier(
            self,
            |c| Expr::IntConst(c.clone()),
            |b, g, d| Expr::binop(b.op(), g, d),
        )
    }
}

impl Clone for BinOp {
    fn clone(&self) -> Self {
        Self {
            op: self.op,
            gauche: Box::new(self.gauche().clone()),
            droite: Box::new(self.droite().clone()),
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pile: Vec<(&Expr, &Expr)> = vec![(self, other)];
        while let Some(paire) = pile.pop() {
            match paire {
                (Expr::IntConst(x), Expr::IntConst(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Expr::BinOp(x), Expr::BinOp(y)) => {
                    if x.op != y.op {
                        return false;
                    }
                    pile.push((x.droite(), y.droite()));
                    pile.push((x.gauche(), y.gauche()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

impl PartialEq for BinOp {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.gauche() == other.gauche() && self.droite() == other.droite()
    }
}

impl Eq for BinOp {}

/// Préfixe étiqueté (0 = feuille, 1 = nœud) : arité fixe, donc sans ambiguïté.
impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pile: Vec<&Expr> = vec![self];
        while let Some(e) = pile.pop() {
            match e {
                Expr::IntConst(c) => {
                    0u8.hash(state);
                    c.hash(state);
                }
                Expr::BinOp(b) => {
                    1u8.hash(state);
                    b.op.hash(state);
                    pile.push(b.droite());
                    pile.push(b.gauche());
                }
            }
        }
    }
}

impl Hash for BinOp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.op.hash(state);
        self.gauche().hash(state);
        self.droite().hash(state);
    }
}

/// Libération itérative : les sous-arbres binaires sont détachés (remplacés
/// par une feuille) puis libérés depuis un Vec, jamais en cascade.
impl Drop for BinOp {
    fn drop(&mut self) {
        let mut a_liberer: Vec<Expr> = Vec::new();
        detacher(&mut self.gauche, &mut a_liberer);
        detacher(&mut self.droite, &mut a_liberer);

        while let Some(e) = a_liberer.pop() {
            if let Expr::BinOp(mut b) = e {
                detacher(&mut b.gauche, &mut a_liberer);
                detacher(&mut b.droite, &mut a_liberer);
                // b n'a plus que des feuilles : son drop ne descend pas
            }
        }
    }
}

fn detacher(enfant: &mut Box<Expr>, a_liberer: &mut Vec<Expr>) {
    if matches!(**enfant, Expr::BinOp(_)) {
        // BigInt zéro : pas d'allocation
        a_liberer.push(std::mem::replace(&mut **enfant, Expr::int_const(0)));
    }
}

impl From<IntConst> for Expr {
    fn from(c: IntConst) -> Self {
        Expr::IntConst(c)
    }
}

impl From<BinOp> for Expr {
    fn from(b: BinOp) -> Self {
        Expr::BinOp(b)
    }
}
