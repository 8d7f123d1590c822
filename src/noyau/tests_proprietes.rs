//! Propriétés (proptest) : numération aller-retour + pipeline vs calcul direct.

use num_bigint::{BigInt, Sign};
use proptest::prelude::*;

use super::eval_expression;
use super::limites::Limites;
use super::numeration::{format_base26, format_en_base, parse_base26, parse_en_base};

// Entiers >= 0 de taille quelconque (jusqu’à 320 bits).
fn entier_positif() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u8>(), 0..40)
        .prop_map(|octets| BigInt::from_bytes_be(Sign::Plus, &octets))
}

// Numéral base 26 canonique : "0" ou sans zéro de tête.
fn numeral_canonique() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[1-9A-P][0-9A-P]{0,30}"]
}

proptest! {
    #[test]
    fn aller_retour_toutes_bases(n in entier_positif(), base in 2u32..=36) {
        let texte = format_en_base(&n, base).unwrap();
        prop_assert_eq!(parse_en_base(&texte, base).unwrap(), n);
    }

    #[test]
    fn aller_retour_base26(s in numeral_canonique()) {
        let n = parse_base26(&s).unwrap();
        prop_assert_eq!(format_base26(&n).unwrap(), s);
    }

    #[test]
    fn base26_permissive_egale_stricte_sur_0_p(s in "[0-9A-P]{1,20}") {
        prop_assert_eq!(parse_base26(&s).unwrap(), parse_en_base(&s, 26).unwrap());
    }

    #[test]
    fn addition_et_produit_comme_bigint(a in numeral_canonique(), b in numeral_canonique()) {
        let va = parse_base26(&a).unwrap();
        let vb = parse_base26(&b).unwrap();
        let limites = Limites::default();

        let (somme, _) = eval_expression(&format!("{a}+{b}"), &limites).unwrap();
        prop_assert_eq!(somme.valeur, &va + &vb);

        let (produit, _) = eval_expression(&format!("{a} * {b}"), &limites).unwrap();
        prop_assert_eq!(produit.valeur, &va * &vb);
    }

    #[test]
    fn pipeline_sans_panique(s in "[0-9A-Za-z+*/%^() @-]{0,24}") {
        // Ok ou Err, jamais de panique ; exposant <= 2 : les chaînes "^" restent petites.
        let _ = eval_expression(&s, &Limites::nouvelles(64, 2));
    }
}
