// src/noyau/jetons.rs

use std::fmt;

/// Opérateur binaire.
///
/// `Inconnu` garde tout autre caractère tel quel : le tokenizer ne filtre rien,
/// l’erreur tombe plus tard (évaluation) si ce caractère arrive dans l’arbre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    Puissance,
    Inconnu(char),
}

impl Operateur {
    pub fn depuis_char(c: char) -> Self {
        match c {
            '+' => Operateur::Plus,
            '-' => Operateur::Moins,
            '*' => Operateur::Fois,
            '/' => Operateur::Divise,
            '%' => Operateur::Modulo,
            '^' => Operateur::Puissance,
            autre => Operateur::Inconnu(autre),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Modulo => '%',
            Operateur::Puissance => '^',
            Operateur::Inconnu(c) => c,
        }
    }

    /// Table de précédence ; inconnu => 0 (jamais dépilé devant un vrai opérateur).
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise | Operateur::Modulo => 2,
            Operateur::Puissance => 3,
            Operateur::Inconnu(_) => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Suite de [0-9A-Z] (non interprétée ici).
    Num(String),
    Op(Operateur),
    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) => f.write_str(s),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
///
/// - espaces ignorés (ne séparent même pas deux numéraux : "1 2" == "12")
/// - alphanumériques ASCII accumulés en numéral
/// - tout autre caractère : vide le numéral en cours, puis devient un jeton à lui seul
///
/// Ne peut pas échouer : les caractères douteux sont jugés plus loin dans le pipeline.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut en_cours = String::new();

    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }

        if c.is_ascii_alphanumeric() {
            en_cours.push(c);
            continue;
        }

        if !en_cours.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut en_cours)));
        }

        out.push(match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            autre => Tok::Op(Operateur::depuis_char(autre)),
        });
    }

    if !en_cours.is_empty() {
        out.push(Tok::Num(en_cours));
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
