//! Noyau base 26
//!
//! Organisation interne :
//! - numeration.rs : numéral base 26 -> BigInt, BigInt -> texte en base 2..36
//! - jetons.rs     : tokenisation (numéraux, opérateurs, parenthèses)
//! - rpn.rs        : shunting-yard + construction de l’arbre
//! - arbre.rs      : arbre d’expression (évaluation + rendu)
//! - eval.rs       : pipeline complet
//! - erreur.rs     : erreurs du pipeline
//! - limites.rs    : garde-fous (jetons, exposant)

pub mod arbre;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod limites;
pub mod numeration;
pub mod rpn;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, DemarcheNoyau, Resultats};
pub use limites::Limites;
