// src/noyau/arbre.rs
//
// Arbre d’expression (propriété exclusive, pas de partage, pas de cycle).
// - Valeur    : numéral d’origine + sa valeur (calculée à la construction)
// - Operation : opérateur + deux enfants
//
// L’arbre est construit de bas en haut par rpn::from_rpn, jamais modifié ensuite.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurCalcul;
use super::jetons::Operateur;
use super::limites::Limites;
use super::numeration::parse_base26;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Noeud {
    Valeur {
        texte: String,
        valeur: BigInt,
    },
    Operation {
        op: Operateur,
        gauche: Box<Noeud>,
        droite: Box<Noeud>,
    },
}

impl Noeud {
    /// Feuille : le numéral est interprété tout de suite (échec immédiat si invalide).
    pub fn valeur(texte: &str) -> Result<Noeud, ErreurCalcul> {
        let valeur = parse_base26(texte)?;
        Ok(Noeud::Valeur {
            texte: texte.to_string(),
            valeur,
        })
    }

    pub fn operation(op: Operateur, gauche: Noeud, droite: Noeud) -> Noeud {
        Noeud::Operation {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Nombre de noeuds (journalisation).
    pub fn taille(&self) -> usize {
        match self {
            Noeud::Valeur { .. } => 1,
            Noeud::Operation { gauche, droite, .. } => 1 + gauche.taille() + droite.taille(),
        }
    }

    /// Évalue gauche puis droite (toujours les deux), puis applique l’opérateur.
    pub fn evaluer(&self, limites: &Limites) -> Result<BigInt, ErreurCalcul> {
        match self {
            Noeud::Valeur { valeur, .. } => Ok(valeur.clone()),
            Noeud::Operation { op, gauche, droite } => {
                let a = gauche.evaluer(limites)?;
                let b = droite.evaluer(limites)?;
                applique(*op, a, b, limites)
            }
        }
    }

    /// Rendu en arbre, une ligne par noeud :
    ///
    /// ```text
    /// +
    /// ├── A
    /// └── *
    ///     ├── B
    ///     └── C
    /// ```
    pub fn rendu(&self) -> Vec<String> {
        let mut lignes = vec![self.etiquette()];
        self.rendu_enfants("", &mut lignes);
        lignes
    }

    fn etiquette(&self) -> String {
        match self {
            Noeud::Valeur { texte, .. } => texte.clone(),
            Noeud::Operation { op, .. } => op.symbole().to_string(),
        }
    }

    fn rendu_enfants(&self, prefixe: &str, lignes: &mut Vec<String>) {
        if let Noeud::Operation { gauche, droite, .. } = self {
            for (enfant, dernier) in [(gauche, false), (droite, true)] {
                let branche = if dernier { "└── " } else { "├── " };
                lignes.push(format!("{prefixe}{branche}{}", enfant.etiquette()));

                let suite = if dernier { "    " } else { "│   " };
                enfant.rendu_enfants(&format!("{prefixe}{suite}"), lignes);
            }
        }
    }
}

fn applique(
    op: Operateur,
    a: BigInt,
    b: BigInt,
    limites: &Limites,
) -> Result<BigInt, ErreurCalcul> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        // division et reste tronqués vers zéro
        Operateur::Divise => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Ok(a / b)
        }
        Operateur::Modulo => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Ok(a % b)
        }
        Operateur::Puissance => {
            let n = exposant(&b, limites)?;
            Ok(a.pow(n))
        }
        Operateur::Inconnu(c) => Err(ErreurCalcul::OperateurInconnu(c)),
    }
}

/// Exposant ramené à u32 : négatif ou hors u32 => refus, au-delà du garde-fou => refus.
fn exposant(b: &BigInt, limites: &Limites) -> Result<u32, ErreurCalcul> {
    if b.is_negative() {
        return Err(ErreurCalcul::argument(format!("exposant négatif : {b}")));
    }
    let n = b
        .to_u32()
        .ok_or_else(|| ErreurCalcul::argument(format!("exposant trop grand : {b}")))?;
    if n > limites.max_exposant {
        log::warn!("exposant {n} refusé (max {})", limites.max_exposant);
        return Err(ErreurCalcul::LimiteDepassee(format!(
            "exposant {n} > {}",
            limites.max_exposant
        )));
    }
    Ok(n)
}
