use db::{setup_db_pool, Category, CategorySummary};

use crate::Result;

pub(crate) async fn print_info(json: bool) -> Result<()> {
    let pool = setup_db_pool().await?;
    let summaries = Category::summaries(&pool).await?;

    println!("{}", render_info(&summaries, json)?);

    Ok(())
}

fn render_info(summaries: &[CategorySummary], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(summaries)?);
    }

    let total: i64 = summaries.iter().map(|s| s.published_recipes).sum();

    let mut out = format!(
        "{} categories, {total} published recipes\n",
        summaries.len()
    );
    for summary in summaries {
        out.push_str(&format!(
            "  [{}] {}: {}\n",
            summary.category_id, summary.name, summary.published_recipes
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> Vec<CategorySummary> {
        vec![
            CategorySummary {
                category_id: 2,
                name: "Desserts".to_string(),
                published_recipes: 3,
            },
            CategorySummary {
                category_id: 1,
                name: "Soups".to_string(),
                published_recipes: 0,
            },
        ]
    }

    #[test]
    fn text_output_lists_every_category_with_totals() {
        let out = render_info(&summaries(), false).unwrap();

        assert!(out.starts_with("2 categories, 3 published recipes"));
        assert!(out.contains("[2] Desserts: 3"));
        assert!(out.contains("[1] Soups: 0"));
    }

    #[test]
    fn json_output_is_an_array_of_summaries() {
        let out = render_info(&summaries(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["published_recipes"], 3);
    }
}
