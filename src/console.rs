// src/console.rs
//
// Mode console : boucle lire -> évaluer -> afficher.
// - EXIT (toutes casses), Ctrl-C ou Ctrl-D : fin de session
// - ligne vide : ignorée
// - une erreur n’arrête jamais la boucle

use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::noyau::{eval_expression, Limites};

const INVITE: &str = "base26> ";
const SENTINELLE: &str = "EXIT";

/// Ce que la console doit faire d’une ligne lue.
#[derive(Debug, PartialEq, Eq)]
pub enum Reponse {
    Quitter,
    Rien,
    Lignes(Vec<String>),
}

/// Traite une ligne (sans I/O).
pub fn traite_ligne(ligne: &str, limites: &Limites) -> Reponse {
    let s = ligne.trim();
    if s.is_empty() {
        return Reponse::Rien;
    }
    if s.eq_ignore_ascii_case(SENTINELLE) {
        return Reponse::Quitter;
    }

    match eval_expression(s, limites) {
        Ok((r, d)) => {
            let mut lignes = vec!["Arbre :".to_string()];
            lignes.extend(d.arbre);
            lignes.push(format!("Base 26 : {}", r.base26));
            lignes.push(format!("Base 10 : {}", r.base10));
            lignes.push(format!("Base 2  : {}", r.base2));
            lignes.push(format!("Base 16 : {}", r.base16));
            Reponse::Lignes(lignes)
        }
        Err(e) => Reponse::Lignes(vec![format!("Erreur : {e}")]),
    }
}

/// Boucle interactive (stdin/stdout).
pub fn boucle(limites: &Limites) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Calculatrice base 26 : chiffres 0-9 et A-P, opérateurs + - * / % ^, parenthèses.");
    println!("Tapez {SENTINELLE} pour quitter.");

    loop {
        match rl.readline(INVITE) {
            Ok(ligne) => {
                if !ligne.trim().is_empty() {
                    rl.add_history_entry(ligne.as_str())?;
                }
                match traite_ligne(&ligne, limites) {
                    Reponse::Quitter => break,
                    Reponse::Rien => {}
                    Reponse::Lignes(lignes) => {
                        for l in lignes {
                            println!("{l}");
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    info!("fin de session console");
    Ok(())
}
