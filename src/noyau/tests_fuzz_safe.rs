//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler eval/format sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - référence indépendante : évaluation récursive en i128 (valeurs petites => pas de débordement)

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::{eval_avec_demarche, eval_expr, format_algebrique, format_constructeur, Expr, Op, Pile};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'arbres (bornée) ------------------------ */

fn gen_feuille(rng: &mut Rng) -> i64 {
    // petits entiers signés dans [-3, 3], incluant 0 et 1 (neutres)
    // borne: |valeur| <= 3^(2^profondeur), tient en i128 jusqu'à profondeur 6
    rng.pick(7) as i64 - 3
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Expr {
    if depth == 0 || rng.pick(4) == 0 {
        return Expr::int_const(gen_feuille(rng));
    }
    let op = if rng.pick(2) == 0 { Op::Plus } else { Op::Times };
    let g = gen_expr(rng, depth - 1);
    let d = gen_expr(rng, depth - 1);
    Expr::binop(op, g, d)
}

/// Référence récursive, indépendante du parcours itératif.
fn reference(e: &Expr) -> i128 {
    match e {
        Expr::IntConst(c) => c.valeur().to_string().parse().unwrap(),
        Expr::BinOp(b) => {
            let g = reference(b.gauche());
            let d = reference(b.droite());
            match b.op() {
                Op::Plus => g + d,
                Op::Times => g * d,
            }
        }
    }
}

/// Rejoue l'arbre en postfixe sur une Pile (construction bottom-up).
fn rejouer_sur_pile(e: &Expr, pile: &mut Pile) {
    match e {
        Expr::IntConst(c) => pile.empiler_entier(&c.valeur().to_string()).unwrap(),
        Expr::BinOp(b) => {
            rejouer_sur_pile(b.gauche(), pile);
            rejouer_sur_pile(b.droite(), pile);
            pile.appliquer(b.op()).unwrap();
        }
    }
}

/* ------------------------ Grammaires (vérif structurelle) ------------------------ */

fn parentheses_equilibrees(s: &str) -> bool {
    let mut n: i64 = 0;
    for ch in s.chars() {
        match ch {
            '(' => n += 1,
            ')' => {
                n -= 1;
                if n < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    n == 0
}

fn nb_binops(e: &Expr) -> usize {
    (e.taille() - 1) / 2
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_eval_contre_reference() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5EED_0001);

    for _ in 0..2_000 {
        let e = gen_expr(&mut rng, 6);
        let v = eval_expr(&e);
        assert_eq!(*v.valeur(), BigInt::from(reference(&e)), "expr={e:?}");

        // déterminisme
        assert_eq!(eval_expr(&e), v);

        // démarche : même résultat, une étape par nœud binaire
        let (v2, etapes) = eval_avec_demarche(&e);
        assert_eq!(v2, v);
        assert_eq!(etapes.len(), nb_binops(&e));
        if let Some(derniere) = etapes.last() {
            assert_eq!(&derniere.resultat, v.valeur());
        }

        budget(start, Duration::from_secs(10));
    }
}

#[test]
fn fuzz_format_structure() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5EED_0002);

    for _ in 0..2_000 {
        let e = gen_expr(&mut rng, 6);
        let alg = format_algebrique(&e);
        let rep = format_constructeur(&e);
        let binops = nb_binops(&e);

        // algébrique : une paire de parenthèses par nœud binaire
        assert!(parentheses_equilibrees(&alg), "alg={alg}");
        assert_eq!(alg.matches('(').count(), binops, "alg={alg}");
        assert_eq!(alg.matches(" + ").count() + alg.matches(" * ").count(), binops);

        // constructeur : une IntConst par feuille, un séparateur par nœud binaire
        assert!(parentheses_equilibrees(&rep), "rep={rep}");
        assert_eq!(rep.matches("IntConst(").count(), e.taille() - binops);
        assert_eq!(rep.matches(", ").count(), binops);
        assert_eq!(rep.matches("Plus(").count() + rep.matches("Times(").count(), binops);

        budget(start, Duration::from_secs(10));
    }
}

#[test]
fn fuzz_pile_reconstruit_le_meme_arbre() {
    let start = Instant::now();
    let mut rng = Rng::new(0x5EED_0003);

    for _ in 0..500 {
        let e = gen_expr(&mut rng, 5);
        let mut pile = Pile::new();
        rejouer_sur_pile(&e, &mut pile);

        assert_eq!(pile.len(), 1);
        assert_eq!(pile.sommet(), Some(&e));
        assert_eq!(format_constructeur(pile.sommet().unwrap()), format_constructeur(&e));

        budget(start, Duration::from_secs(10));
    }
}

#[test]
fn fuzz_concurrent_lecteurs() {
    let mut rng = Rng::new(0x5EED_0004);
    let e = gen_expr(&mut rng, 8);
    let attendu = (eval_expr(&e), format_algebrique(&e));

    std::thread::scope(|s| {
        let poignees: Vec<_> = (0..4)
            .map(|_| s.spawn(|| (eval_expr(&e), format_algebrique(&e))))
            .collect();
        for p in poignees {
            assert_eq!(p.join().unwrap(), attendu);
        }
    });
}
