// src/noyau/numeration.rs
//
// Numération : texte <-> BigInt.
// - Alphabet : 0-9 puis A-Z (valeurs 0..35), majuscules seulement.
// - Entrée  : base 26 (parse_base26), tolérante sur les chiffres >= 26.
// - Sortie  : n’importe quelle base 2..36, valeurs >= 0 seulement.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::erreur::ErreurCalcul;

/// Base des numéraux saisis.
pub const BASE_ENTREE: u32 = 26;

const BASE_MIN: u32 = 2;
const BASE_MAX: u32 = 36;

/// Valeur d’un symbole de l’alphabet (`'7'` -> 7, `'B'` -> 11).
pub fn valeur_chiffre(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Symbole d’une valeur 0..35 (`11` -> `'B'`).
pub fn chiffre(valeur: u32) -> Option<char> {
    char::from_digit(valeur, BASE_MAX).map(|c| c.to_ascii_uppercase())
}

/// Numéral base 26 -> entier.
///
/// NOTE: aucune borne n’est imposée au chiffre : `Q`..`Z` (26..35) sont acceptés
/// et replient dans l’accumulation `acc*26 + v` (ex: "Q" == 26 == "10").
pub fn parse_base26(texte: &str) -> Result<BigInt, ErreurCalcul> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::argument("numéral vide"));
    }

    let base = BigInt::from(BASE_ENTREE);
    let mut acc = BigInt::zero();
    for c in s.chars() {
        let v = valeur_chiffre(c)
            .ok_or_else(|| ErreurCalcul::argument(format!("caractère invalide '{c}' dans {s:?}")))?;
        acc = acc * &base + BigInt::from(v);
    }
    Ok(acc)
}

/// Numéral en base quelconque -> entier (strict : chaque chiffre < base).
pub fn parse_en_base(texte: &str, base: u32) -> Result<BigInt, ErreurCalcul> {
    verifie_base(base)?;

    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::argument("numéral vide"));
    }

    let b = BigInt::from(base);
    let mut acc = BigInt::zero();
    for c in s.chars() {
        let v = match valeur_chiffre(c) {
            Some(v) if v < base => v,
            _ => {
                return Err(ErreurCalcul::argument(format!(
                    "chiffre '{c}' invalide en base {base}"
                )))
            }
        };
        acc = acc * &b + BigInt::from(v);
    }
    Ok(acc)
}

/// Entier >= 0 -> texte en base 2..36 (chiffres majuscules, "0" pour zéro).
pub fn format_en_base(valeur: &BigInt, base: u32) -> Result<String, ErreurCalcul> {
    verifie_base(base)?;
    if valeur.is_negative() {
        return Err(ErreurCalcul::argument(format!(
            "valeur négative non représentable : {valeur}"
        )));
    }
    if valeur.is_zero() {
        return Ok("0".to_string());
    }
    Ok(valeur.to_str_radix(base).to_ascii_uppercase())
}

/// Variante dédiée base 26 : refuse le négatif au lieu de le tronquer.
pub fn format_base26(valeur: &BigInt) -> Result<String, ErreurCalcul> {
    if valeur.is_negative() {
        return Err(ErreurCalcul::argument(format!(
            "base 26 : valeur négative {valeur}"
        )));
    }
    format_en_base(valeur, BASE_ENTREE)
}

fn verifie_base(base: u32) -> Result<(), ErreurCalcul> {
    if !(BASE_MIN..=BASE_MAX).contains(&base) {
        return Err(ErreurCalcul::argument(format!(
            "base {base} hors de [{BASE_MIN}, {BASE_MAX}]"
        )));
    }
    Ok(())
}
