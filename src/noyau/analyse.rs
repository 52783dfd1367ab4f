// src/noyau/analyse.rs
//
// Regroupement des jetons en opérations unitaires.
//
// Chaque sorte d'opérateur est regroupée SANS connaître les autres sortes :
// un nombre qui appartient mathématiquement à l'opérateur voisin peut donc
// apparaître "manquant" ici. C'est voulu : la greffe d'un palier antérieur
// le fournira au moment de l'évaluation.
//
// Règle de non-chevauchement (même sorte seulement) : un nombre déjà pris
// comme arg2 par le motif précédent de la même sorte ne peut pas resservir
// d'arg1 au motif suivant. Exemple "2+3+4" :
//   Addition n°1 : arg1=2, arg2=3 (position 0)
//   Addition n°2 : arg1=manquant, arg2=4 (position 3, le 3 est déjà pris)
// Les deux additions partagent le 3 uniquement via la greffe.

use super::jetons::{Jeton, JetonPose};
use super::operations::{OperationSimple, Operateur, ORDRE_PALIERS};

/// Regroupe la suite de jetons en opérations unitaires, une passe par sorte
/// d'opérateur, puis fusionne le tout trié par position croissante.
pub fn grouper_operations(jetons: &[JetonPose]) -> Vec<OperationSimple> {
    let mut ops: Vec<OperationSimple> = Vec::new();

    for sorte in ORDRE_PALIERS {
        grouper_sorte(sorte, jetons, &mut ops);
    }

    // positions uniques par construction => ordre gauche-droite d'origine
    ops.sort_by_key(|op| op.position);
    ops
}

/// Cohérence d'ensemble après fusion : l'exposant est évalué au premier
/// palier et ne peut recevoir AUCUNE greffe. Ses deux opérandes doivent
/// donc être présentes dès l'analyse.
pub fn operations_coherentes(ops: &[OperationSimple]) -> bool {
    for op in ops {
        if op.operateur == Operateur::Exposant && (op.arg1.is_none() || op.arg2.is_none()) {
            return false;
        }
    }
    true
}

/// Une passe : toutes les opérations d'une sorte donnée, dans l'ordre.
fn grouper_sorte(sorte: Operateur, jetons: &[JetonPose], ops: &mut Vec<OperationSimple>) {
    if sorte == Operateur::Racine {
        for j in jetons {
            if let Jeton::Racine(valeur) = j.jeton {
                ops.push(OperationSimple {
                    position: j.position,
                    operateur: Operateur::Racine,
                    arg1: Some(valeur),
                    arg2: None, // la racine est unaire
                });
            }
        }
        return;
    }

    // indice du jeton-nombre consommé comme arg2 par le motif précédent
    // (même sorte) : indisponible comme arg1 du motif courant
    let mut arg2_pris: Option<usize> = None;

    for (i, j) in jetons.iter().enumerate() {
        match j.jeton {
            Jeton::Operateur(op) if op == sorte => {}
            _ => continue,
        }

        // opérande de gauche : le nombre immédiatement précédent, s'il
        // n'est pas déjà pris par le motif précédent de cette sorte
        let gauche = match i.checked_sub(1) {
            Some(k) if arg2_pris != Some(k) => match jetons[k].jeton {
                Jeton::Nombre(v) => Some((jetons[k].position, v)),
                _ => None,
            },
            _ => None,
        };

        // opérande de droite : le nombre immédiatement suivant
        let droite = match jetons.get(i + 1) {
            Some(suivant) => match suivant.jeton {
                Jeton::Nombre(v) => Some(v),
                _ => None,
            },
            None => None,
        };

        arg2_pris = if droite.is_some() { Some(i + 1) } else { None };

        // position = début du motif : l'opérande de gauche si le motif en
        // inclut une, sinon le symbole lui-même
        let position = match gauche {
            Some((pos, _)) => pos,
            None => j.position,
        };

        ops.push(OperationSimple {
            position,
            operateur: sorte,
            arg1: gauche.map(|(_, v)| v),
            arg2: droite,
        });
    }
}
