//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l'état du constructeur (entrée, pile, résultats, erreur, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas d'appel à eval, pas de format).
//! - Actions déterministes, sans effet de bord caché.

use arbre_expr::Pile;

#[derive(Clone, Default, Debug)]
pub struct Resultats {
    pub exact: String,        // valeur évaluée (IntConst)
    pub algebrique: String,   // "(7 + (2 + 3))"
    pub constructeur: String, // "Plus(IntConst(7), ...)"
    pub mesures: String,      // taille / profondeur
}

#[derive(Clone, Debug)]
pub struct AppExpr {
    // --- entrée utilisateur (un littéral entier) ---
    pub entree: String,

    // --- arbre en construction ---
    pub pile: Pile,

    // --- sorties ---
    pub resultats: Resultats,
    pub erreur: String,

    // --- démarche (une ligne par nœud combiné) ---
    pub demarche: Vec<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppExpr {
    fn default() -> Self {
        Self {
            entree: String::new(),
            pile: Pile::new(),
            resultats: Resultats::default(),
            erreur: String::new(),
            demarche: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppExpr {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + pile + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.pile.vider();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l'entrée ni à la pile).
    pub fn clear_resultats(&mut self) {
        self.resultats = Resultats::default();
        self.erreur.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE les résultats (dernier calcul) pour ne pas “effacer l'écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(&mut self, resultats: Resultats, demarche: Vec<String>) {
        self.erreur.clear();
        self.resultats = resultats;
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
