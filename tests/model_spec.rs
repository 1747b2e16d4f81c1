use menu_store::models::{Course, CourseFilter, Dish, Price};
use menu_store::ValidationError;
use speculate2::speculate;

speculate! {
    describe "course" {
        it "round-trips every variant through its canonical name" {
            for course in Course::ALL {
                assert_eq!(Course::from_str(course.as_str()), Some(course));
            }
        }

        it "rejects names outside the enumeration" {
            assert!(Course::from_str("Beverage").is_none());
            assert!(Course::from_str("starter").is_none());
            assert!(Course::from_str("").is_none());
        }
    }

    describe "course_filter" {
        it "parses the All sentinel and each course name" {
            assert_eq!(CourseFilter::from_str("All"), Some(CourseFilter::All));
            assert_eq!(
                CourseFilter::from_str("Dessert"),
                Some(CourseFilter::Only(Course::Dessert))
            );
        }

        it "rejects labels outside the enumeration" {
            assert!(CourseFilter::from_str("Everything").is_none());
            assert!(CourseFilter::from_str("all").is_none());
        }

        it "matches every course under All and only its own otherwise" {
            for course in Course::ALL {
                assert!(CourseFilter::All.matches(course));
            }
            assert!(CourseFilter::Only(Course::Main).matches(Course::Main));
            assert!(!CourseFilter::Only(Course::Main).matches(Course::Dessert));
        }
    }

    describe "price" {
        it "parses a bare amount" {
            let price = Price::parse("80").expect("bare amount rejected");
            assert_eq!(price.amount(), 80.0);
        }

        it "parses an R-prefixed amount with surrounding whitespace" {
            let price = Price::parse("  R120.5 ").expect("prefixed amount rejected");
            assert_eq!(price.amount(), 120.5);
        }

        it "renders with the R prefix and no trailing zeros" {
            assert_eq!(Price::parse("100").unwrap().to_string(), "R100");
            assert_eq!(Price::parse("80.5").unwrap().to_string(), "R80.5");
        }

        it "rejects an empty entry" {
            assert_eq!(Price::parse("   "), Err(ValidationError::EmptyPrice));
        }

        it "rejects a non-numeric entry" {
            assert_eq!(
                Price::parse("ten rand"),
                Err(ValidationError::PriceNotNumeric { raw: "ten rand".to_string() })
            );
        }

        it "rejects a non-finite entry" {
            assert!(matches!(
                Price::parse("inf"),
                Err(ValidationError::PriceNotNumeric { .. })
            ));
        }

        it "rejects a negative amount" {
            assert_eq!(
                Price::parse("R-5"),
                Err(ValidationError::NegativePrice { amount: -5.0 })
            );
        }
    }

    describe "dish serialization" {
        it "serializes to the flat record shape" {
            let dish = Dish {
                id: "3".to_string(),
                name: "Cake".to_string(),
                description: "Sweet".to_string(),
                course: Course::Dessert,
                price: Price::parse("80").unwrap(),
            };

            let value = serde_json::to_value(&dish).expect("serialization failed");
            assert_eq!(
                value,
                serde_json::json!({
                    "id": "3",
                    "name": "Cake",
                    "description": "Sweet",
                    "course": "Dessert",
                    "price": "R80",
                })
            );
        }

        it "deserializes a record with a prefixed price" {
            let dish: Dish = serde_json::from_value(serde_json::json!({
                "id": "1",
                "name": "Starter 1",
                "description": "Delicious Starter 1",
                "course": "Starter",
                "price": "R100",
            }))
            .expect("deserialization failed");

            assert_eq!(dish.course, Course::Starter);
            assert_eq!(dish.price.amount(), 100.0);
        }

        it "rejects a record with a negative price" {
            let result = serde_json::from_value::<Dish>(serde_json::json!({
                "id": "1",
                "name": "Starter 1",
                "description": "Delicious Starter 1",
                "course": "Starter",
                "price": "R-10",
            }));

            assert!(result.is_err());
        }
    }
}
