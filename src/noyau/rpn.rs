// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> arbre
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire l’arbre (Noeud)
//
// Règles:
// - précédence : + - => 1 ; * / % => 2 ; ^ => 3 ; inconnu => 0
// - égalité de précédence => on dépile (associativité à gauche, ^ compris :
//   "2^3^2" == (2^3)^2)
// - un opérateur ne traverse jamais une '(' en attente

use log::{debug, trace};

use super::arbre::Noeud;
use super::erreur::ErreurCalcul;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("2"), Op(+), Num("3"), Op(*), Num("4")]
///   rpn:    [Num("2"), Num("3"), Num("4"), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => parenthèse fermante orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }
            }

            Tok::Op(op) => {
                while let Some(&Tok::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    trace!("'{}' sort devant '{}'", top.symbole(), op.symbole());
                    ops.pop();
                    out.push(Tok::Op(top));
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(top);
    }

    Ok(out)
}

/// Construit l’arbre à partir d’une RPN.
///
/// Opérateur : on dépile droite PUIS gauche (ordre postfixe).
/// À la fin, il doit rester exactement un noeud.
pub fn from_rpn(rpn: &[Tok]) -> Result<Noeud, ErreurCalcul> {
    let mut st: Vec<Noeud> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(s) => st.push(Noeud::valeur(s)?),

            Tok::Op(op) => {
                let manque = || {
                    ErreurCalcul::expression(format!("opérande manquant pour '{}'", op.symbole()))
                };
                let droite = st.pop().ok_or_else(manque)?;
                let gauche = st.pop().ok_or_else(manque)?;
                st.push(Noeud::operation(*op, gauche, droite));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::expression("parenthèse inattendue en RPN"))
            }
        }
    }

    let racine = st
        .pop()
        .ok_or_else(|| ErreurCalcul::expression("aucun opérande"))?;
    if !st.is_empty() {
        return Err(ErreurCalcul::expression(format!(
            "{} opérandes sans opérateur",
            st.len() + 1
        )));
    }

    debug!("arbre construit : {} noeuds", racine.taille());
    Ok(racine)
}
