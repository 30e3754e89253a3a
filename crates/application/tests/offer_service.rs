use catalog_application::{
    ApplicationError, InMemoryOfferRepository, InMemoryProductDirectory, OfferRepository,
    OfferService,
};
use catalog_core::{
    CustomizationId, DomainError, Entity, Name, OfferId, OptionId, Price, ProductId, Quantity,
    Status,
};
use catalog_observability::{LogFormat, ObservabilityConfig};
use catalog_offers::{
    Customization, NewCustomization, NewOffer, NewOption, Offer, OfferOption, Product,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

type Service = OfferService<InMemoryOfferRepository, InMemoryProductDirectory>;

fn init_tracing() {
    catalog_observability::init_with(&ObservabilityConfig {
        filter: "debug".to_string(),
        format: LogFormat::Pretty,
    });
}

fn price(value: Decimal) -> Price {
    Price::new(value).unwrap()
}

fn option(value: Decimal) -> OfferOption {
    OfferOption::new(NewOption {
        id: OptionId::new(),
        name: Name::new("Topping").unwrap(),
        description: None,
        product: None,
        quantity: Quantity::new(1, 2).unwrap(),
        status: Status::Available,
        price: price(value),
        customizations: vec![],
        media: vec![],
    })
}

fn customization(min: u32, options: Vec<OfferOption>) -> Customization {
    let max = options.len() as u32;
    Customization::new(NewCustomization {
        id: CustomizationId::new(),
        name: Name::new("Toppings").unwrap(),
        description: None,
        quantity: Quantity::new(min, max).unwrap(),
        status: Status::Available,
        options,
    })
    .unwrap()
}

fn offer(customizations: Vec<Customization>) -> Offer {
    Offer::new(NewOffer {
        id: OfferId::new(),
        name: Name::new("Pizza").unwrap(),
        description: None,
        product: None,
        price: price(dec!(7.50)),
        status: Status::Available,
        customizations,
        media: vec![],
    })
    .unwrap()
}

fn product() -> Product {
    Product::new(ProductId::new(), Name::new("Mozzarella").unwrap(), None, vec![])
}

/// Service holding one offer: Offer -> toppings -> [cheese -> crusts -> [thin], olives].
struct Seeded {
    service: Service,
    offer_id: OfferId,
    toppings: CustomizationId,
    cheese: OptionId,
    crusts: CustomizationId,
    thin: OptionId,
}

fn seeded() -> Seeded {
    init_tracing();

    let thin = option(dec!(1.00));
    let crusts = customization(1, vec![thin.clone()]);
    let cheese = option(dec!(0.50)).with_customizations(vec![crusts.clone()]);
    let olives = option(dec!(2.00));
    let toppings = customization(1, vec![cheese.clone(), olives]);
    let offer = offer(vec![toppings.clone()]);

    let service = OfferService::new(
        InMemoryOfferRepository::new(),
        InMemoryProductDirectory::new(),
    );
    service.create_offer(offer.clone()).unwrap();

    Seeded {
        service,
        offer_id: offer.id_typed(),
        toppings: *toppings.id(),
        cheese: *cheese.id(),
        crusts: *crusts.id(),
        thin: *thin.id(),
    }
}

#[test]
fn create_offer_rejects_existing_id() {
    let s = seeded();
    let existing = s.service.offer(s.offer_id).unwrap();

    let err = s.service.create_offer(existing).unwrap_err();
    assert_eq!(err, ApplicationError::OfferAlreadyExists(s.offer_id));
}

#[test]
fn minimal_price_reflects_stored_tree() {
    let s = seeded();
    // 7.50 + cheapest topping (cheese 0.50 + crust 1.00 = 1.50 < olives 2.00)
    assert_eq!(s.service.minimal_price(s.offer_id).unwrap(), price(dec!(9.00)));
}

#[test]
fn unknown_offer_is_not_found() {
    let s = seeded();
    let missing = OfferId::new();

    let err = s.service.minimal_price(missing).unwrap_err();
    assert_eq!(err, ApplicationError::OfferNotFound(missing));
}

#[test]
fn adds_option_to_nested_customization() {
    let s = seeded();
    let thick = option(dec!(1.50));

    let offer = s
        .service
        .add_option(s.offer_id, s.crusts, thick.clone())
        .unwrap();

    assert_eq!(offer.find_option_in_children_by_id(thick.id()), Some(&thick));
    let stored = s.service.offer(s.offer_id).unwrap();
    assert_eq!(stored, offer);
}

#[test]
fn adds_customization_under_nested_option() {
    let s = seeded();
    let sauces = customization(0, vec![option(dec!(0.30))]);

    s.service
        .add_customization(s.offer_id, Some(s.thin), sauces.clone())
        .unwrap();

    let stored = s.service.offer(s.offer_id).unwrap();
    assert_eq!(stored.find_customization_in_children_by_id(sauces.id()), Some(&sauces));
}

#[test]
fn missing_parent_option_is_reported() {
    let s = seeded();
    let stranger = OptionId::new();

    let err = s
        .service
        .add_customization(s.offer_id, Some(stranger), customization(0, vec![option(dec!(1))]))
        .unwrap_err();

    assert_eq!(err, ApplicationError::OptionNotFound(stranger));
}

#[test]
fn missing_parent_customization_is_reported() {
    let s = seeded();
    let stranger = CustomizationId::new();

    let err = s
        .service
        .remove_option(s.offer_id, stranger, s.thin)
        .unwrap_err();

    assert_eq!(err, ApplicationError::CustomizationNotFound(stranger));
}

#[test]
fn duplicate_in_sibling_branch_is_not_saved() {
    let s = seeded();
    let before = s.service.offer(s.offer_id).unwrap();
    let thin = before.find_option_in_children_by_id(&s.thin).unwrap().clone();

    let err = s
        .service
        .add_option(s.offer_id, s.toppings, thin)
        .unwrap_err();

    assert_eq!(
        err,
        ApplicationError::Domain(DomainError::DuplicatedOption(vec![s.thin]))
    );
    assert_eq!(s.service.offer(s.offer_id).unwrap(), before);
}

#[test]
fn making_last_required_option_unavailable_is_rejected() {
    let s = seeded();
    let offer = s.service.offer(s.offer_id).unwrap();
    let thin = offer.find_option_in_children_by_id(&s.thin).unwrap().clone();

    let err = s
        .service
        .update_option(s.offer_id, s.crusts, thin.with_status(Status::Unavailable))
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::CustomizationMinPermitted { .. })
    ));
}

#[test]
fn removing_unknown_option_keeps_offer() {
    let s = seeded();
    let before = s.service.offer(s.offer_id).unwrap();

    let after = s
        .service
        .remove_option(s.offer_id, s.toppings, OptionId::new())
        .unwrap();

    assert_eq!(after, before);
}

#[test]
fn removes_nested_customization() {
    let s = seeded();

    let offer = s
        .service
        .remove_customization(s.offer_id, Some(s.cheese), s.crusts)
        .unwrap();

    assert!(offer.find_customization_in_children_by_id(&s.crusts).is_none());
    assert!(offer.find_option_in_children_by_id(&s.thin).is_none());
    assert_eq!(offer.minimal_price(), price(dec!(8.00)));
}

#[test]
fn updates_top_level_customization() {
    let s = seeded();
    let offer = s.service.offer(s.offer_id).unwrap();
    let toppings = offer
        .find_customization_in_children_by_id(&s.toppings)
        .unwrap()
        .clone();
    let mut new: NewCustomization = toppings.into();
    new.quantity = Quantity::new(2, 2).unwrap();
    let stricter = Customization::new(new).unwrap();

    let offer = s
        .service
        .update_customization(s.offer_id, None, stricter)
        .unwrap();

    // both toppings now required: 7.50 + 1.50 + 2.00
    assert_eq!(offer.minimal_price(), price(dec!(11.00)));
}

#[test]
fn zero_price_is_rejected() {
    let s = seeded();

    let err = s
        .service
        .set_offer_price(s.offer_id, Price::ZERO)
        .unwrap_err();

    assert_eq!(err, ApplicationError::Domain(DomainError::OfferPriceZero));
    assert_eq!(s.service.offer(s.offer_id).unwrap().price(), price(dec!(7.50)));
}

#[test]
fn unknown_products_block_the_save() {
    let s = seeded();
    let mozzarella = product();
    let with_product = option(dec!(0.90)).with_product(Some(mozzarella.clone()));

    let err = s
        .service
        .add_option(s.offer_id, s.toppings, with_product.clone())
        .unwrap_err();
    assert_eq!(
        err,
        ApplicationError::ProductsNotFound(vec![mozzarella.id_typed()])
    );

    s.service.products().register(mozzarella.id_typed()).unwrap();
    let offer = s
        .service
        .add_option(s.offer_id, s.toppings, with_product)
        .unwrap();
    assert_eq!(offer.all_products(), vec![&mozzarella]);
    assert!(
        s.service
            .repository()
            .load(s.offer_id)
            .unwrap()
            .is_some()
    );
}
