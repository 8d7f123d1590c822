// src/config.rs
//
// Options en ligne de commande (natif seulement).
// La journalisation se règle à part, via RUST_LOG (env_logger).

use clap::Parser;

use crate::noyau::limites::{Limites, MAX_EXPOSANT_DEFAUT, MAX_JETONS_DEFAUT};

#[derive(Debug, Parser)]
#[command(
    name = "calculatrice_base26",
    version,
    about = "Calculatrice entière en base 26 (résultats en bases 26, 10, 2 et 16)"
)]
pub struct Options {
    /// Mode console (lecture ligne par ligne, EXIT pour quitter) au lieu de l’interface graphique
    #[arg(long)]
    pub console: bool,

    /// Nombre maximal de jetons par expression
    #[arg(long, default_value_t = MAX_JETONS_DEFAUT)]
    pub max_jetons: usize,

    /// Exposant maximal accepté pour ^
    #[arg(long, default_value_t = MAX_EXPOSANT_DEFAUT)]
    pub max_exposant: u32,
}

impl Options {
    pub fn limites(&self) -> Limites {
        Limites::nouvelles(self.max_jetons, self.max_exposant)
    }
}
