//! Noyau — évaluation (pipeline réel)
//!
//! majuscules -> jetons -> garde-fou -> RPN -> arbre -> évaluation -> bases 26/10/2/16
//!
//! Chaque étape échoue vite : pas de résultat partiel.

use log::{debug, warn};
use num_bigint::BigInt;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::limites::Limites;
use super::numeration::{format_base26, format_en_base};
use super::rpn::{from_rpn, to_rpn};

/// Valeur finale et ses quatre écritures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resultats {
    pub valeur: BigInt,
    pub base26: String,
    pub base10: String,
    pub base2: String,
    pub base16: String,
}

impl Resultats {
    /// Échoue (ArgumentInvalide) sur une valeur négative : aucune base de sortie n’a de signe.
    pub fn depuis_valeur(valeur: BigInt) -> Result<Resultats, ErreurCalcul> {
        Ok(Resultats {
            base26: format_base26(&valeur)?,
            base10: format_en_base(&valeur, 10)?,
            base2: format_en_base(&valeur, 2)?,
            base16: format_en_base(&valeur, 16)?,
            valeur,
        })
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub postfixe: String,
    pub arbre: Vec<String>,
}

/// API publique : évalue une expression et retourne:
/// - Resultats (bases 26, 10, 2, 16)
/// - Démarche (jetons, postfixe, rendu de l’arbre)
///
/// L’entrée est mise en majuscules ici ("a+b" == "A+B").
pub fn eval_expression(
    expr_str: &str,
    limites: &Limites,
) -> Result<(Resultats, DemarcheNoyau), ErreurCalcul> {
    let s = expr_str.trim().to_ascii_uppercase();
    if s.is_empty() {
        return Err(ErreurCalcul::expression("entrée vide"));
    }

    // 1) Jetons
    let jetons = tokenize(&s);
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons : {jetons_txt}");
    if jetons.len() > limites.max_jetons {
        warn!(
            "expression refusée : {} jetons (max {})",
            jetons.len(),
            limites.max_jetons
        );
        return Err(ErreurCalcul::LimiteDepassee(format!(
            "{} jetons > {}",
            jetons.len(),
            limites.max_jetons
        )));
    }

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let postfixe = format_tokens(&rpn);
    debug!("postfixe : {postfixe}");

    // 3) Arbre
    let arbre = from_rpn(&rpn)?;

    // 4) Évaluation + écritures
    let valeur = arbre.evaluer(limites)?;
    debug!("valeur : {valeur}");
    let resultats = Resultats::depuis_valeur(valeur)?;

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        postfixe,
        arbre: arbre.rendu(),
    };

    Ok((resultats, d))
}
