// src/app/vue.rs
//
// Vue (UI egui) : bureau natif
// ----------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour toutes les sections de la vue
// - Clavier : Enter soumet (quand le champ est focus), ESC géré dans app.rs
// - Souris : gros boutons, focus redonné après clic (focus_entree)
// - Historique repliable : clic sur une ligne pour rappeler l'entrée
//
// Note :
// - PAS de Key::NumEnter (n'existe pas dans egui 0.33.x)
// - Enter suffit
// - Backspace reste au TextEdit ; DEL (bouton) retire un motif complet

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_historique(ui);

                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);

                self.ui_fonctions(ui);

                ui.add_space(6.0);

                self.ui_pave(ui);
            });
    }

    /* ------------------------ Historique (repliable) ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let titre = if self.historique_visible {
                "Historique ▾"
            } else {
                "Historique ▸"
            };
            if ui.button(titre).clicked() {
                self.basculer_historique();
            }

            if self.historique_visible {
                let resp = ui
                    .button("vider")
                    .on_hover_text("Efface tout l'historique");
                if resp.clicked() {
                    self.moteur.vider_historique();
                }
            }
        });

        if !self.historique_visible {
            return;
        }

        // Rappel différé : on ne mute pas l'entrée pendant qu'on itère le journal.
        let mut rappel: Option<String> = None;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id("historique_liste", |ui| {
                    ui.set_min_width(ui.available_width());
                    egui::ScrollArea::vertical()
                        .max_height(120.0)
                        .show(ui, |ui| {
                            if self.moteur.historique().is_empty() {
                                ui.monospace("(vide)");
                                return;
                            }

                            // Déduplication d'affichage seulement : le journal garde tout.
                            let mut vues: Vec<String> = Vec::new();
                            for e in self.moteur.historique() {
                                let ligne = e.ligne();
                                if vues.contains(&ligne) {
                                    continue;
                                }

                                let resp = ui.selectable_label(
                                    false,
                                    egui::RichText::new(&ligne).monospace(),
                                );
                                if resp.clicked() {
                                    rappel = Some(e.entree.clone());
                                }

                                vues.push(ligne);
                            }
                        });
                });
            });

        if let Some(entree) = rappel {
            self.rappeler(entree);
        }
    }

    /* ------------------------ Affichage (résultat / erreur) ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Erreur en rouge, sinon dernier résultat (ou "0" au repos) en jaune.
        let (texte, couleur) = if !self.erreur.is_empty() {
            (self.erreur.as_str(), egui::Color32::RED)
        } else if self.resultat.is_empty() {
            ("0", egui::Color32::YELLOW)
        } else {
            (self.resultat.as_str(), egui::Color32::YELLOW)
        };

        egui::Frame::group(ui.style())
            .fill(egui::Color32::BLACK)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        ui.label(
                            egui::RichText::new(texte)
                                .monospace()
                                .size(32.0)
                                .color(couleur),
                        );
                    },
                );
            });
    }

    /* ------------------------ Entrée + actions ------------------------ */

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sqrt 16 + 9, 2^-3, 10 mod 3")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / fonctions / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter soumet (seulement si le champ est focus) ---
        // On évite les déclenchements "globaux" quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.soumettre_entree();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur", Action::ClearResultats);
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro totale (historique compris)",
                Action::ResetTotal,
            );

            ui.separator();

            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.soumettre_entree();
            }
        });
    }

    /* ------------------------ Fonctions ------------------------ */

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "exp", "exp(", InsertKind::Func);
            self.bouton_insert(ui, "ln", "ln(", InsertKind::Func);
            self.bouton_insert(ui, "log10", "log10(", InsertKind::Func);
            self.bouton_insert(ui, "log2", "log2(", InsertKind::Func);
            self.bouton_insert(ui, "sqrt", "sqrt(", InsertKind::Func);
        });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_insert(ui, "*", "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                self.bouton_insert(ui, "/", "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, "+", "+", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", ".", InsertKind::Digit);
                self.bouton_insert(ui, "mod", "mod", InsertKind::Op);
                self.bouton_insert(ui, "-", "-", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
                self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);
                self.bouton_insert(ui, "^", "^", InsertKind::Op);
                ui.label("");
                ui.end_row();
            });
    }

    /* ------------------------ Helpers ------------------------ */

    /// Backspace "intelligent" : retire d'un coup les motifs utiles ("sqrt(", "mod", etc.).
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        // Retire espaces finaux
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        // Retire motifs connus (les plus longs d'abord)
        for pat in ["log10(", "log2(", "sqrt(", "exp(", "ln(", "mod"] {
            if self.entree.ends_with(pat) {
                for _ in 0..pat.chars().count() {
                    self.entree.pop();
                }
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                return;
            }
        }

        // Sinon : un caractère
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
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
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() || to_insert.is_empty() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen | InsertKind::Func => {
                if !self.entree.is_empty() {
                    let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = last {
                        if c.is_ascii_digit() || c.is_ascii_alphabetic() || c == ')' {
                            self.entree.push(' ');
                        }
                    }
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d'espaces auto
                self.entree.push_str(to_insert);
            }
        }

        self.focus_entree = true;
    }

    /// Soumet l'expression au moteur, puis dépose résultat ou erreur dans l'état UI.
    fn soumettre_entree(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match self.moteur.soumettre(s) {
            Ok(rendu) => self.set_resultat(rendu),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Func,
    Op,
    OpenParen,
    CloseParen,
}
