// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppExpr (etat.rs) pour natif + wasm
// - Clavier : Enter empile l'entier saisi (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Construction postfixe : 4, 8, "+" => Plus(IntConst(4), IntConst(8))

use eframe::egui;

use arbre_expr::{eval_avec_demarche, format_algebrique, format_constructeur, Expr, IntConst, Op};

use super::etat::{AppExpr, Resultats};

impl AppExpr {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Arbre d’expressions");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pile(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entier :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 4, -17, 123456789012345678901234567890")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter empile (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.empiler_entree();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Retire le sommet de la pile", Action::Depiler);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_action(ui, "Empiler", "IntConst(entrée)", Action::Empiler);

            ui.separator();

            self.bouton_action(ui, "+", "Plus(avant-dernier, dernier)", Action::Appliquer(Op::Plus));
            self.bouton_action(ui, "*", "Times(avant-dernier, dernier)", Action::Appliquer(Op::Times));

            ui.separator();

            self.bouton_action(
                ui,
                "Exemple",
                "Plus(IntConst(7), Plus(IntConst(2), IntConst(3)))",
                Action::Exemple,
            );

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.evaluer_sommet();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pile(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Pile ({}) :", self.pile.len()));

        // sommet en premier
        let lignes: Vec<String> = self
            .pile
            .iter()
            .rev()
            .enumerate()
            .map(|(i, e)| format!("{i:>3}  {}", format_algebrique(e)))
            .collect();
        let contenu = if lignes.is_empty() {
            "vide".to_string()
        } else {
            lignes.join("\n")
        };
        Self::champ_monospace(ui, "pile_out", &contenu, 3);
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.resultats.exact, 1);

        ui.add_space(6.0);
        ui.label("Algébrique :");
        Self::champ_monospace(ui, "algebrique_out", &self.resultats.algebrique, 1);

        ui.add_space(6.0);
        ui.label("Constructeur :");
        Self::champ_monospace(ui, "constructeur_out", &self.resultats.constructeur, 1);

        ui.add_space(6.0);
        ui.label("Mesures :");
        Self::champ_monospace(ui, "mesures_out", &self.resultats.mesures, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                let contenu = self.demarche.join("\n");
                Self::champ_monospace(ui, "demarche_out", &contenu, 2);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Depiler => self.depiler_sommet(),
                Action::Empiler => self.empiler_entree(),
                Action::Appliquer(op) => self.appliquer_op(op),
                Action::Exemple => self.charger_exemple(),
            }
            self.focus_entree = true;
        }
    }

    /* ------------------------ Actions sur la pile (via noyau) ------------------------ */

    /// Empile l'entier saisi ; l'entrée est vidée seulement en cas de succès.
    pub(crate) fn empiler_entree(&mut self) {
        match self.pile.empiler_entier(&self.entree) {
            Ok(()) => {
                self.entree.clear();
                self.erreur.clear();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    pub(crate) fn appliquer_op(&mut self, op: Op) {
        // un entier en attente dans le champ est empilé d'abord (comme une calculatrice RPN)
        if !self.entree.trim().is_empty() {
            self.empiler_entree();
            if !self.erreur.is_empty() {
                return;
            }
        }

        match self.pile.appliquer(op) {
            Ok(()) => self.erreur.clear(),
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    pub(crate) fn depiler_sommet(&mut self) {
        match self.pile.depiler() {
            Ok(e) => {
                tracing::debug!(taille = e.taille(), "dépiler");
                self.erreur.clear();
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    pub(crate) fn charger_exemple(&mut self) {
        let exemple = Expr::plus(
            IntConst::new(7),
            Expr::plus(IntConst::new(2), IntConst::new(3)),
        );
        match self.pile.empiler(exemple) {
            Ok(()) => self.erreur.clear(),
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    /// Évalue le sommet de la pile (sans le consommer), puis dépose EXACT/rendus/démarche.
    pub(crate) fn evaluer_sommet(&mut self) {
        let Some(expr) = self.pile.sommet() else {
            self.set_erreur("pile vide : rien à évaluer");
            return;
        };

        let (valeur, etapes) = eval_avec_demarche(expr);
        let resultats = Resultats {
            exact: valeur.to_string(),
            algebrique: format_algebrique(expr),
            constructeur: format_constructeur(expr),
            mesures: format!("taille {}, profondeur {}", expr.taille(), expr.profondeur()),
        };
        let demarche = etapes.iter().map(|e| e.to_string()).collect();

        tracing::info!(resultat = %valeur, etapes = etapes.len(), "évaluation du sommet");
        self.set_resultats(resultats, demarche);
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Depiler,
    Empiler,
    Appliquer(Op),
    Exemple,
}
