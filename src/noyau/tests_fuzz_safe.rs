//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée, exposants petits
//! - budget temps global
//! - chaque expression générée porte sa valeur attendue (calcul BigInt direct)
//! - seules les erreurs du domaine sont tolérées (division par zéro, négatif, etc.)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::ErreurCalcul;
use super::eval_expression;
use super::limites::Limites;
use super::numeration::{chiffre, format_base26};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    // Liste blanche : erreurs *normales* pour des opérandes aléatoires.
    matches!(
        e,
        ErreurCalcul::DivisionParZero | ErreurCalcul::ArgumentInvalide(_)
    )
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Numéral base 26 (chiffres 0..P) + sa valeur.
fn gen_numeral(rng: &mut Rng) -> (String, BigInt) {
    let longueur = 1 + rng.pick(4);
    let mut texte = String::new();
    let mut valeur = BigInt::zero();
    for _ in 0..longueur {
        let v = rng.pick(26);
        if let Some(c) = chiffre(v) {
            texte.push(c);
        }
        valeur = valeur * 26 + v;
    }
    (texte, valeur)
}

/// Expression entièrement parenthésée + valeur attendue (None si une erreur doit survenir).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Option<BigInt>) {
    if depth == 0 || rng.pick(4) == 0 {
        let (t, v) = gen_numeral(rng);
        return (t, Some(v));
    }

    let (ta, va) = gen_expr(rng, depth - 1);

    // exposant : petit numéral seul (garde la taille sous contrôle)
    if rng.pick(6) == 0 {
        let k = rng.pick(4);
        let texte = format!("({ta})^{k}");
        return (texte, va.map(|a| a.pow(k)));
    }

    let (tb, vb) = gen_expr(rng, depth - 1);
    let (sym, attendu) = match rng.pick(5) {
        0 => ('+', combine(va, vb, |a, b| Some(a + b))),
        1 => ('-', combine(va, vb, |a, b| Some(a - b))),
        2 => ('*', combine(va, vb, |a, b| Some(a * b))),
        3 => (
            '/',
            combine(va, vb, |a, b| if b.is_zero() { None } else { Some(a / b) }),
        ),
        _ => (
            '%',
            combine(va, vb, |a, b| if b.is_zero() { None } else { Some(a % b) }),
        ),
    };

    // espaces aléatoires : ignorés par le tokenizer
    let sep = if rng.coin() { " " } else { "" };
    (format!("({ta}{sep}{sym}{sep}{tb})"), attendu)
}

fn combine(
    a: Option<BigInt>,
    b: Option<BigInt>,
    f: impl FnOnce(BigInt, BigInt) -> Option<BigInt>,
) -> Option<BigInt> {
    match (a, b) {
        (Some(a), Some(b)) => f(a, b),
        _ => None,
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_conformes_au_calcul_direct() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let limites = Limites::default();

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);

        match (eval_expression(&expr, &limites), attendu) {
            (Ok((r, _d)), Some(v)) => {
                assert_eq!(r.valeur, v, "expr={expr:?}");
                assert_eq!(r.base26, format_base26(&v).unwrap(), "expr={expr:?}");
                seen_ok += 1;
            }
            (Ok((r, _d)), None) => {
                panic!("succès inattendu: expr={expr:?} valeur={}", r.valeur)
            }
            (Err(e), attendu) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                // erreur légitime : soit un calcul impossible, soit un résultat négatif
                assert!(
                    attendu.map_or(true, |v| v.is_negative()),
                    "expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let limites = Limites::default();
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let (e1, _) = gen_expr(&mut r1, 4);
        let (e2, _) = gen_expr(&mut r2, 4);
        assert_eq!(e1, e2);
        assert_eq!(
            eval_expression(&e1, &limites),
            eval_expression(&e2, &limites)
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    // Caractères quelconques : le pipeline doit toujours répondre par Ok ou Err.
    const ALPHABET: &[char] = &[
        '0', '1', '7', 'A', 'P', 'Q', 'Z', 'z', '+', '-', '*', '/', '%', '^', '(', ')', ' ', '@',
        '.', 'é',
    ];

    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let limites = Limites::nouvelles(64, 2);
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let n = rng.pick(16) as usize;
        let s: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();
        let _ = eval_expression(&s, &limites);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1", 1000);
    budget(t0, max);

    let (r, d) = eval_expression(&expr, &Limites::default()).unwrap_or_else(|e| panic!("err: {e}"));

    assert_eq!(r.base10, "1000");
    assert_eq!(r.base26, "1CC");
    assert_eq!(d.arbre.len(), 1999);
}

#[test]
fn fuzz_safe_chaine_gauche_longue() {
    // 1-1+1-1+... : arbre en peigne, profondeur ~ nombre de termes
    let mut expr = String::from("Z");
    for i in 0..500 {
        expr.push(if i % 2 == 0 { '+' } else { '-' });
        expr.push('1');
    }

    let (r, _d) = eval_expression(&expr, &Limites::default()).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(r.valeur.to_u32(), Some(35));
}
