//! Property tests over whole offer trees.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use catalog_core::{
    AggregateRoot, CustomizationId, DomainError, Entity, Name, OptionId, Quantity, Status,
};

use crate::fixtures::{customization, offer, option, price};
use crate::{Customization, NewCustomization, NewOption, OfferOption};

fn cents(value: u32) -> Decimal {
    Decimal::new(i64::from(value), 2)
}

fn option_with_id(id: u8, value: Decimal) -> OfferOption {
    let new: NewOption = option(value, 0, 1).into();
    OfferOption::new(NewOption {
        id: OptionId::from_uuid(Uuid::from_u128(u128::from(id))),
        ..new
    })
}

fn customization_with_id(id: u8, options: Vec<OfferOption>) -> Customization {
    Customization::new(NewCustomization {
        id: CustomizationId::from_uuid(Uuid::from_u128(u128::from(id))),
        name: Name::new("Group").unwrap(),
        description: None,
        quantity: Quantity::optional(options.len() as u32),
        status: Status::Available,
        options,
    })
    .unwrap()
}

fn available_count(c: &Customization) -> usize {
    c.options().iter().filter(|o| o.status().is_available()).count()
}

fn has_duplicates(ids: &[u8]) -> bool {
    ids.iter().collect::<HashSet<_>>().len() != ids.len()
}

#[derive(Debug, Clone)]
enum Mutation {
    SetStatus(usize, bool),
    Remove(usize),
    Add(bool),
    SetMin(u32),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (0..8usize, any::<bool>()).prop_map(|(idx, available)| Mutation::SetStatus(idx, available)),
        (0..8usize).prop_map(Mutation::Remove),
        any::<bool>().prop_map(Mutation::Add),
        (0..8u32).prop_map(Mutation::SetMin),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: no sequence of mutations, successful or not, leaves fewer
    /// available options than the customization requires.
    #[test]
    fn available_options_never_drop_below_minimum(
        initial in 1usize..6,
        min_seed in 0u32..6,
        mutations in prop::collection::vec(mutation(), 0..24)
    ) {
        let options: Vec<_> = (0..initial).map(|_| option(cents(100), 1, 1)).collect();
        let min = min_seed.min(initial as u32);
        let mut c = customization(min, 8, options);

        for m in mutations {
            match m {
                Mutation::SetStatus(idx, available) => {
                    if let Some(target) = c.options().get(idx).cloned() {
                        let status = if available { Status::Available } else { Status::Unavailable };
                        let _ = c.update_option(target.with_status(status));
                    }
                }
                Mutation::Remove(idx) => {
                    if let Some(id) = c.options().get(idx).map(|o| *o.id()) {
                        let _ = c.remove_option(&id);
                    }
                }
                Mutation::Add(available) => {
                    let status = if available { Status::Available } else { Status::Unavailable };
                    let _ = c.add_option(option(cents(50), 1, 1).with_status(status));
                }
                Mutation::SetMin(min) => {
                    let _ = c.set_quantity(Quantity::new(min, min.max(8)).unwrap());
                }
            }

            prop_assert!(
                available_count(&c) >= c.quantity().min_permitted() as usize,
                "available {} < min {}",
                available_count(&c),
                c.quantity().min_permitted()
            );
        }
    }

    /// Property: raising any option's price never lowers the offer's
    /// minimal price.
    #[test]
    fn minimal_price_is_monotonic_in_option_price(
        prices in prop::collection::vec(0u32..10_000, 1..6),
        min_seed in 0u32..6,
        bump_idx in 0usize..6,
        bump in 0u32..5_000
    ) {
        let options: Vec<_> = prices.iter().map(|p| option(cents(*p), 1, 1)).collect();
        let min = min_seed.min(options.len() as u32);
        let group = customization(min, options.len() as u32, options);
        let mut o = offer(Decimal::ONE, vec![group.clone()]);
        let before = o.minimal_price();

        let target = group.options()[bump_idx % group.options().len()].clone();
        let raised = target.price().value() + cents(bump);
        o.find_customization_in_children_by_id_mut(group.id())
            .unwrap()
            .update_option(target.with_price(price(raised)))
            .unwrap();

        prop_assert!(o.minimal_price() >= before);
    }

    /// Property: requiring one more option never lowers the minimal price.
    #[test]
    fn minimal_price_is_monotonic_in_min_permitted(
        prices in prop::collection::vec(0u32..10_000, 2..6),
        min_seed in 0u32..5
    ) {
        let count = prices.len() as u32;
        let options: Vec<_> = prices.iter().map(|p| option(cents(*p), 1, 1)).collect();
        let min = min_seed.min(count - 1);
        let mut group = customization(min, count, options);
        let before = group.minimal_price();

        group.set_quantity(Quantity::new(min + 1, count).unwrap()).unwrap();

        prop_assert!(group.minimal_price() >= before);
    }

    /// Property: `validate` succeeds iff customization ids and option ids are
    /// each unique across the whole tree, whatever the nesting.
    #[test]
    fn validate_detects_duplicates_at_any_depth(
        groups in prop::collection::vec(
            (0u8..6, prop::collection::vec(0u8..10, 1..4)),
            1..5
        )
    ) {
        // Each group hangs under the first option of the previous one.
        let mut nested: Option<Customization> = None;
        for (customization_id, option_ids) in groups.iter().rev() {
            let mut options: Vec<_> = option_ids
                .iter()
                .map(|id| option_with_id(*id, cents(100)))
                .collect();
            if let Some(child) = nested.take() {
                options[0] = options[0].clone().with_customizations(vec![child]);
            }
            nested = Some(customization_with_id(*customization_id, options));
        }
        let o = offer(Decimal::ONE, nested.into_iter().collect());

        let customization_ids: Vec<u8> = groups.iter().map(|(id, _)| *id).collect();
        let option_ids: Vec<u8> = groups.iter().flat_map(|(_, ids)| ids.iter().copied()).collect();

        match o.validate() {
            Ok(()) => {
                prop_assert!(!has_duplicates(&customization_ids));
                prop_assert!(!has_duplicates(&option_ids));
            }
            Err(DomainError::DuplicatedCustomization(ids)) => {
                prop_assert!(has_duplicates(&customization_ids));
                prop_assert!(!ids.is_empty());
            }
            Err(DomainError::DuplicatedOption(ids)) => {
                prop_assert!(!has_duplicates(&customization_ids));
                prop_assert!(has_duplicates(&option_ids));
                prop_assert!(!ids.is_empty());
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }
}
