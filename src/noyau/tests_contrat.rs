//! Tests contrat (campagne) : taxonomie d'erreurs + ordre des paliers + greffes.
//!
//! Notes importantes (aligné avec le comportement du moteur) :
//! - L'ordre des paliers est un choix de conception, PAS la précédence
//!   mathématique : multiplication avant division, addition avant
//!   soustraction. "2-3+4" vaut donc -5 (l'addition 3+4 part en premier et
//!   se greffe dans la soustraction), pas 3.
//! - Les deux messages "Inconsistent operations"/"Inconsistent operation"
//!   sont distincts (analyse vs palier) et le restent.
//! - Pas de moins unaire : "-5+3" pave, passe l'analyse (seul l'exposant y
//!   est vérifié) et échoue seulement à son palier.

use super::evaluer_expression;

fn assert_resultat(expr: &str, attendu: &str) {
    let sortie = evaluer_expression(expr);
    assert_eq!(sortie, attendu, "expr={expr:?}");
}

fn assert_valeur(expr: &str, attendu: f64) {
    let sortie = evaluer_expression(expr);
    let valeur: f64 = sortie
        .parse()
        .unwrap_or_else(|_| panic!("sortie non numérique: expr={expr:?} sortie={sortie:?}"));
    assert_eq!(valeur, attendu, "expr={expr:?} sortie={sortie:?}");
}

/* ------------------------ Syntaxe (pavage strict) ------------------------ */

#[test]
fn contrat_espaces_refuses() {
    // zéro tolérance aux espaces, où qu'ils soient
    assert_resultat("2 + 2", "Invalid syntax");
    assert_resultat(" 2+2", "Invalid syntax");
    assert_resultat("2+2 ", "Invalid syntax");
    assert_resultat(" ", "Invalid syntax");
}

#[test]
fn contrat_point_final_refuse() {
    // "1." ne pave pas : le point n'appartient à aucun nombre
    assert_resultat("1.+2", "Invalid syntax");
    assert_resultat("2+1.", "Invalid syntax");
    assert_resultat("2..5", "Invalid syntax");
}

#[test]
fn contrat_racine_frontiere_de_mot() {
    // 's' collé à un chiffre : l'appel racine ne démarre pas
    assert_resultat("2sqrt(4)", "Invalid syntax");
    assert_resultat("2+3sqrt(4)", "Invalid syntax");

    // collé à un symbole ou à une parenthèse fermante : accepté
    assert_resultat("+sqrt(4)", "Inconsistent operation");
    assert_valeur("sqrt(4)sqrt(4)", 2f64.sqrt());
}

#[test]
fn contrat_racine_argument_strict() {
    // l'argument est UN nombre, pas une sous-expression
    assert_resultat("sqrt(2+3)", "Invalid syntax");
    assert_resultat("sqrt(-4)", "Invalid syntax");
    assert_resultat("sqrt()", "Invalid syntax");
    assert_resultat("sqrt(4", "Invalid syntax");
    assert_resultat("sqr(4)", "Invalid syntax");
}

#[test]
fn contrat_suite_de_nombres_sans_operateur() {
    // "1.5.5" pave en deux nombres (1.5 puis .5) : rien à évaluer
    assert_resultat("1.5.5", "No operators present");
    assert_resultat("5", "No operators present");
    assert_resultat(".5", "No operators present");
}

/* ------------------------ Taxonomie : deux messages distincts ------------------------ */

#[test]
fn contrat_incoherence_analyse_pluriel() {
    // l'exposant ne reçoit jamais de greffe : vérifié dès l'analyse
    assert_resultat("^5", "Inconsistent operations");
    assert_resultat("5^", "Inconsistent operations");
    assert_resultat("2^3^2", "Inconsistent operations");
    assert_resultat("sqrt(4)^2", "Inconsistent operations");
}

#[test]
fn contrat_incoherence_palier_singulier() {
    assert_resultat("2*", "Inconsistent operation");
    assert_resultat("/2", "Inconsistent operation");
    assert_resultat("+", "Inconsistent operation");
}

#[test]
fn contrat_moins_unaire_absent() {
    // "-5+3" : la soustraction orpheline passe l'analyse (seul l'exposant y
    // est contrôlé) et échoue à son palier — comportement à conserver.
    assert_resultat("-5+3", "Inconsistent operation");
}

/* ------------------------ Ordre des paliers ------------------------ */

#[test]
fn contrat_multiplication_avant_division() {
    // palier multiplication d'abord : 3*4=12 se greffe, puis 2/12
    assert_valeur("2/3*4", 2.0 / 12.0);
}

#[test]
fn contrat_addition_avant_soustraction() {
    // 3+4=7 se greffe dans la soustraction : 2-7
    assert_valeur("2-3+4", -5.0);
}

#[test]
fn contrat_exposant_en_premier() {
    assert_valeur("2*3^2", 18.0);
    assert_valeur("2^2+sqrt(9)", 7.0);
}

#[test]
fn contrat_racine_avant_les_binaires() {
    assert_valeur("5*sqrt(4)", 10.0);
    assert_valeur("sqrt(4)*2", 4.0);
}

/* ------------------------ Greffes ------------------------ */

#[test]
fn contrat_greffe_dans_le_meme_palier() {
    // les deux racines sont du même palier : la première greffe 4 dans la
    // seconde AVANT son calcul => sqrt(sqrt(16)) et non sqrt(16)
    assert_resultat("sqrt(16)sqrt(16)", "2");
}

#[test]
fn contrat_chaine_d_additions() {
    assert_valeur("1+2+3+4", 10.0);
}

#[test]
fn contrat_operande_partagee_entre_sortes() {
    // le 3 sert d'arg2 à l'addition ET d'arg1 à la multiplication ;
    // la greffe de 3*4 écrase ensuite l'arg2 de l'addition
    assert_valeur("2+3*4", 14.0);
}

/* ------------------------ f64 : valeurs spéciales ------------------------ */

#[test]
fn contrat_infini_se_propage() {
    let sortie = evaluer_expression("4/0+1");
    let valeur: f64 = sortie
        .parse()
        .unwrap_or_else(|_| panic!("sortie non numérique: {sortie:?}"));
    assert!(valeur.is_infinite() && valeur > 0.0, "sortie={sortie:?}");
}

#[test]
fn contrat_nan_se_propage_comme_valeur() {
    // NaN est un résultat, pas la sentinelle "opérande manquante" :
    // greffé dans l'addition, il se propage au lieu de faire échouer.
    let sortie = evaluer_expression("0/0+1");
    let valeur: f64 = sortie
        .parse()
        .unwrap_or_else(|_| panic!("sortie non numérique: {sortie:?}"));
    assert!(valeur.is_nan(), "sortie={sortie:?}");
}

#[test]
fn contrat_decimaux() {
    assert_valeur(".5+.5", 1.0);
    assert_valeur("1.5*2", 3.0);
    assert_valeur("2.5^2", 6.25);
}
