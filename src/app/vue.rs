// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : pavé 0-9 / A-P, focus redonné après clic (focus_entree)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::{AppCalc, Bases, Demarche, EXPOSANT_MAX_UI};
use crate::noyau::numeration::{chiffre, BASE_ENTREE};

/// Colonnes du pavé base 26.
const COLONNES_PAVE: u32 = 6;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice base 26");
                ui.add_space(6.0);

                self.ui_entree(ui);

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
        ui.label("Entrée (base 26) :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: A+B, 10*10, (ZZ-P)%7, 2^3^2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + garde-fou exposant
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Exposant max :");
            let mut e = self.limites.max_exposant;
            let resp = ui.add(
                egui::DragValue::new(&mut e)
                    .speed(10)
                    .range(0..=EXPOSANT_MAX_UI),
            );
            if resp.changed() {
                self.set_max_exposant(e);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            for op in ["+", "-", "*", "/", "%", "^"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_base26(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Pavé 0-9 puis A-P (les 26 chiffres de la base d’entrée) + DEL.
    fn ui_pave_base26(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_base26")
            .num_columns(COLONNES_PAVE as usize)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for v in 0..BASE_ENTREE {
                    if let Some(c) = chiffre(v) {
                        self.bouton_insert(ui, &c.to_string(), InsertKind::Digit);
                    }
                    if (v + 1) % COLONNES_PAVE == 0 {
                        ui.end_row();
                    }
                }
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        let Bases {
            base26,
            base10,
            base2,
            base16,
        } = &self.bases;

        for (titre, id, contenu) in [
            ("Base 26", "base26_out", base26),
            ("Base 10", "base10_out", base10),
            ("Base 2", "base2_out", base2),
            ("Base 16", "base16_out", base16),
        ] {
            ui.label(format!("{titre} :"));
            Self::champ_monospace(ui, id, contenu, 1);
            ui.add_space(4.0);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Arbre")
            .default_open(true)
            .show(ui, |ui| {
                let lignes = self.demarche.arbre.join("\n");
                let rows = self.demarche.arbre.len().max(1);
                Self::champ_monospace(ui, "demarche_arbre", &lignes, rows);
            });

        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Postfixe", "demarche_postfixe", &self.demarche.postfixe);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
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
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }
        insere(&mut self.entree, texte, kind);
        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau, puis dépose bases/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match crate::noyau::eval_expression(&self.entree, &self.limites) {
            Ok((r, d)) => {
                let bases = Bases {
                    base26: r.base26,
                    base10: r.base10,
                    base2: r.base2,
                    base16: r.base16,
                };
                let demarche = Demarche {
                    jetons: d.jetons,
                    postfixe: d.postfixe,
                    arbre: d.arbre,
                };
                self.set_resultats(bases, demarche);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

/// Insertion “propre” depuis un bouton (espaces autour des opérateurs).
/// L’espacement est cosmétique : le tokenizer ignore les espaces.
fn insere(entree: &mut String, texte: &str, kind: InsertKind) {
    match kind {
        InsertKind::CloseParen => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            entree.push_str(texte);
        }
        InsertKind::OpenParen | InsertKind::Digit => entree.push_str(texte),
        InsertKind::Op => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(texte);
            entree.push(' ');
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
    Op,
    OpenParen,
    CloseParen,
}
