//! Garde-fous du noyau (anti-gel).
//!
//! Le calcul en précision arbitraire n’est borné que par la mémoire :
//! on plafonne le nombre de jetons (profondeur de l’arbre) et l’exposant de `^`.

/// Nombre de jetons par défaut au-delà duquel on refuse l’expression.
pub const MAX_JETONS_DEFAUT: usize = 4096;

/// Exposant maximal accepté par défaut pour `^`.
pub const MAX_EXPOSANT_DEFAUT: u32 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub max_jetons: usize,
    pub max_exposant: u32,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            max_jetons: MAX_JETONS_DEFAUT,
            max_exposant: MAX_EXPOSANT_DEFAUT,
        }
    }
}

impl Limites {
    /// `max_jetons` est ramené à au moins 1 (une expression a toujours un jeton).
    pub fn nouvelles(max_jetons: usize, max_exposant: u32) -> Self {
        Self {
            max_jetons: max_jetons.max(1),
            max_exposant,
        }
    }
}
