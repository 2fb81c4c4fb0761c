use rand::seq::SliceRandom;
use rand::Rng;

pub fn random_pick<'a, T, R>(choices: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    choices.choose(rng)
}
