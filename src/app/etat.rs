//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, quatre bases, arbre, erreur, démarche,
//! garde-fous) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur l’exposant maximal réglable depuis l’UI.

use crate::noyau::Limites;

/// Garde-fou : plafond du réglage “exposant max” dans l’UI.
pub const EXPOSANT_MAX_UI: u32 = 1_000_000;

/// Les quatre écritures du résultat.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Bases {
    pub base26: String,
    pub base10: String,
    pub base2: String,
    pub base16: String,
}

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub postfixe: String,
    pub arbre: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub bases: Bases,
    pub erreur: String, // message d’erreur (si parsing/éval échoue)

    // --- démarche (jetons, postfixe, arbre) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub limites: Limites,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_limites(Limites::default())
    }
}

impl AppCalc {
    pub fn avec_limites(limites: Limites) -> Self {
        Self {
            entree: String::new(),
            bases: Bases::default(),
            erreur: String::new(),
            demarche: Demarche::default(),
            limites,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats), les garde-fous restent.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui le précèdent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.bases = Bases::default();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE les bases (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - On efface la démarche (elle ne correspond plus à l’entrée).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(&mut self, bases: Bases, demarche: Demarche) {
        self.erreur.clear();
        self.bases = bases;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne l’exposant maximal.
    pub fn set_max_exposant(&mut self, max: u32) {
        self.limites.max_exposant = max.min(EXPOSANT_MAX_UI);
        self.focus_entree = true;
    }
}
